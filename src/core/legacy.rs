//! The earlier invoice shape: a single `total`, contact and tax details on
//! the parties, and bank payment details.
//!
//! Documents in this shape are converted into [`Invoice`] rather than
//! merged with it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::deserialize_date;
use super::types::{Invoice, LineItem, Party};

/// Invoice in the earlier shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyInvoice {
    pub invoice_number: String,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub invoice_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub due_date: NaiveDate,
    pub bill_from: LegacyBillFrom,
    pub bill_to: LegacyBillTo,
    pub line_items: Vec<LineItem>,
    pub payment_details: PaymentDetails,
    /// Grand total, tax included.
    pub total: Decimal,
}

/// Issuer with contact and tax details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBillFrom {
    pub name: String,
    pub website: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
}

/// Recipient with contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyBillTo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub email: String,
    pub phone: String,
}

/// Bank account the invoice is payable to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub bank_name: String,
    pub account_number: String,
    pub iban: String,
    pub swift_code: String,
}

impl LegacyInvoice {
    /// Convert to the current shape.
    ///
    /// Contact, tax id, website and payment details have no counterpart and
    /// are dropped. The reference is empty. `subtotal` is the sum of the
    /// line totals and `tax` is whatever remains of `total`, so the
    /// given total is preserved. Amounts beyond the decimal range
    /// saturate; [`validate_invoice`](super::validate_invoice) reports them.
    pub fn into_invoice(self) -> Invoice {
        let subtotal = self
            .line_items
            .iter()
            .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.total));
        Invoice {
            invoice_number: self.invoice_number,
            reference: String::new(),
            currency: self.currency,
            invoice_date: self.invoice_date,
            due_date: self.due_date,
            bill_from: self.bill_from.into(),
            bill_to: self.bill_to.into(),
            line_items: self.line_items,
            subtotal,
            tax: self.total.saturating_sub(subtotal),
            total: self.total,
        }
    }
}

impl From<LegacyInvoice> for Invoice {
    fn from(legacy: LegacyInvoice) -> Self {
        legacy.into_invoice()
    }
}

impl From<LegacyBillFrom> for Party {
    fn from(p: LegacyBillFrom) -> Self {
        Party {
            name: p.name,
            address: p.address,
            city: p.city,
            state: p.state,
            zip: p.zip,
            country: p.country,
        }
    }
}

impl From<LegacyBillTo> for Party {
    fn from(p: LegacyBillTo) -> Self {
        Party {
            name: p.name,
            address: p.address,
            city: p.city,
            state: p.state,
            zip: p.zip,
            country: p.country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn legacy() -> LegacyInvoice {
        LegacyInvoice {
            invoice_number: "INV-0042".into(),
            currency: "EUR".into(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 4, 4).unwrap(),
            bill_from: LegacyBillFrom {
                name: "Acme Studio".into(),
                website: "https://acme.example".into(),
                address: "1 Main St".into(),
                city: "Austin".into(),
                state: "TX".into(),
                zip: "78701".into(),
                country: "US".into(),
                email: "billing@acme.example".into(),
                phone: "+1 512 555 0100".into(),
                tax_id: "12-3456789".into(),
            },
            bill_to: LegacyBillTo {
                name: "Globex Ltd".into(),
                address: "10 High St".into(),
                city: "London".into(),
                state: String::new(),
                zip: "EC1A 1BB".into(),
                country: "GB".into(),
                email: "ap@globex.example".into(),
                phone: "+44 20 7946 0000".into(),
            },
            line_items: vec![
                LineItem {
                    name: "Design".into(),
                    quantity: dec!(10),
                    price: dec!(150),
                    total: dec!(1500),
                },
                LineItem {
                    name: "Hosting".into(),
                    quantity: dec!(1),
                    price: dec!(49.90),
                    total: dec!(49.90),
                },
            ],
            payment_details: PaymentDetails {
                bank_name: "First Bank".into(),
                account_number: "000123456789".into(),
                iban: "GB29NWBK60161331926819".into(),
                swift_code: "NWBKGB2L".into(),
            },
            total: dec!(1859.88),
        }
    }

    #[test]
    fn conversion_splits_total() {
        let inv = legacy().into_invoice();
        assert_eq!(inv.subtotal, dec!(1549.90));
        assert_eq!(inv.tax, dec!(309.98));
        assert_eq!(inv.total, dec!(1859.88));
        assert_eq!(inv.subtotal + inv.tax, inv.total);
        assert!(inv.reference.is_empty());
    }

    #[test]
    fn conversion_keeps_postal_fields() {
        let inv: Invoice = legacy().into();
        assert_eq!(inv.bill_from.name, "Acme Studio");
        assert_eq!(inv.bill_from.zip, "78701");
        assert_eq!(inv.bill_to.city, "London");
        assert_eq!(inv.line_items.len(), 2);
        assert_eq!(inv.currency, "EUR");
    }
}
