use chrono::NaiveDate;
use invoicefmt::core::*;
use rust_decimal_macros::dec;

fn main() {
    let invoice = InvoiceBuilder::new("INV-2024-017", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2024, 4, 4).unwrap())
        .reference("PO-7781")
        .currency("EUR")
        .bill_from(
            PartyBuilder::new("Acme Studio")
                .address("1 Main St")
                .city("Austin")
                .state("TX")
                .zip("78701")
                .country("US")
                .build(),
        )
        .bill_to(
            PartyBuilder::new("Globex Ltd")
                .address("10 High St")
                .city("London")
                .zip("EC1A 1BB")
                .country("GB")
                .build(),
        )
        .add_line(LineItemBuilder::new("Website design", dec!(40), dec!(95)).build())
        .add_line(LineItemBuilder::new("Hosting (monthly)", dec!(3), dec!(49.90)).build())
        .tax(dec!(750.44))
        .build()
        .expect("invoice should be consistent");

    let view = format_invoice(&invoice).expect("EUR is a known currency");

    println!("Invoice {} ({})", view.invoice_number, view.reference);
    println!("Issued {}  Due {}", view.invoice_date, view.due_date);
    println!();
    println!("From: {}", view.bill_from.name);
    for line in &view.bill_from.address_lines {
        println!("      {line}");
    }
    println!("To:   {}", view.bill_to.name);
    for line in &view.bill_to.address_lines {
        println!("      {line}");
    }
    println!();
    for item in &view.line_items {
        println!(
            "{:<24} {:>6} x {:>10} = {:>12}",
            item.name, item.quantity, item.price, item.total
        );
    }
    println!("{:>58}", format!("Subtotal {}", view.subtotal));
    println!("{:>58}", format!("Tax {}", view.tax));
    println!("{:>58}", format!("Total {}", view.total));

    // Raw strings straight from a form
    println!();
    println!("{}", format_date("2024-12-01T09:30:00Z"));
    println!("{}", format_date("tomorrow"));
    match format_currency(dec!(99.5), "ZZZ") {
        Ok(s) => println!("{s}"),
        Err(e) => println!("error: {e}"),
    }
}
