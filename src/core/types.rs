use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::deserialize_date;

/// Invoice: the document passed between the editor and the renderer.
///
/// Serialized with camelCase keys (`invoiceNumber`, `billFrom`, ...).
/// Derived amounts are plain fields: `line_items[i].total`, `subtotal` and
/// `total` are expected to agree with the other fields, which
/// [`validate_invoice`](super::validate_invoice) checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice number as printed on the document.
    pub invoice_number: String,
    /// Free-form reference (purchase order, project code).
    pub reference: String,
    /// ISO 4217 currency code; empty means USD.
    pub currency: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub invoice_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    pub due_date: NaiveDate,
    /// Issuer.
    pub bill_from: Party,
    /// Recipient.
    pub bill_to: Party,
    /// Billable entries, in display order.
    pub line_items: Vec<LineItem>,
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Tax amount.
    pub tax: Decimal,
    /// subtotal + tax.
    pub total: Decimal,
}

/// Bill-from or bill-to party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    /// Street address.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Party {
    /// Postal address as display lines, skipping empty parts.
    ///
    /// `["1 Main St", "Austin, TX 78701", "US"]`
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if !self.address.trim().is_empty() {
            lines.push(self.address.trim().to_string());
        }

        let region = [self.state.trim(), self.zip.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let locality = [self.city.trim(), region.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if !locality.is_empty() {
            lines.push(locality);
        }

        if !self.country.trim().is_empty() {
            lines.push(self.country.trim().to_string());
        }
        lines
    }
}

/// One billable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub quantity: Decimal,
    /// Unit price.
    pub price: Decimal,
    /// quantity × price.
    pub total: Decimal,
}
