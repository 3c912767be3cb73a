use invoicefmt::core::json::{parse_any_invoice, to_json_pretty};
use invoicefmt::core::*;

const LEGACY: &str = r#"{
  "invoiceNumber": "INV-0042",
  "currency": "",
  "invoiceDate": "2024-03-05",
  "dueDate": "2024-03-19",
  "billFrom": {
    "name": "Acme Studio", "website": "https://acme.example", "address": "1 Main St",
    "city": "Austin", "state": "TX", "zip": "78701", "country": "US",
    "email": "billing@acme.example", "phone": "+1 512 555 0100", "taxId": "12-3456789"
  },
  "billTo": {
    "name": "Globex Ltd", "address": "10 High St", "city": "London", "state": "",
    "zip": "EC1A 1BB", "country": "GB", "email": "ap@globex.example", "phone": "+44 20 7946 0000"
  },
  "lineItems": [
    { "name": "Design", "quantity": 12, "price": 80, "total": 960 }
  ],
  "paymentDetails": {
    "bankName": "First Bank", "accountNumber": "000123456789",
    "iban": "GB29NWBK60161331926819", "swiftCode": "NWBKGB2L"
  },
  "total": 1036.8
}"#;

fn main() -> Result<(), InvoiceError> {
    let invoice = parse_any_invoice(LEGACY)?;

    let findings = validate_invoice(&invoice);
    if findings.is_empty() {
        println!("Imported invoice is consistent.");
    } else {
        for f in &findings {
            println!("  {f}");
        }
    }

    let view = format_invoice(&invoice)?;
    println!(
        "{}: subtotal {}, tax {}, total {}",
        view.invoice_number, view.subtotal, view.tax, view.total
    );
    println!("{}", to_json_pretty(&invoice)?);
    Ok(())
}
