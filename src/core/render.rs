//! Display-ready view of an [`Invoice`]: every date and amount already
//! passed through the formatters, ready to drop into a template.

use serde::Serialize;

use super::error::FormatError;
use super::format::{LOCALE, format_amount, format_naive_date, format_quantity, resolve_currency};
use super::types::{Invoice, Party};

/// Formatted invoice. All fields are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedInvoice {
    /// Locale the strings were rendered for (always `en-US`).
    pub locale: &'static str,
    pub invoice_number: String,
    pub reference: String,
    /// Resolved currency code; `USD` when the invoice left it empty.
    pub currency: String,
    pub invoice_date: String,
    pub due_date: String,
    pub bill_from: FormattedParty,
    pub bill_to: FormattedParty,
    pub line_items: Vec<FormattedLineItem>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedParty {
    pub name: String,
    pub address_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedLineItem {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
}

/// Render an invoice for display.
///
/// Fails only when the invoice currency is malformed or unknown.
pub fn format_invoice(invoice: &Invoice) -> Result<FormattedInvoice, FormatError> {
    let currency = resolve_currency(&invoice.currency)?;
    let money = |amount| format_amount(amount, currency);

    Ok(FormattedInvoice {
        locale: LOCALE,
        invoice_number: invoice.invoice_number.clone(),
        reference: invoice.reference.clone(),
        currency: currency.code.to_string(),
        invoice_date: format_naive_date(invoice.invoice_date),
        due_date: format_naive_date(invoice.due_date),
        bill_from: format_party(&invoice.bill_from),
        bill_to: format_party(&invoice.bill_to),
        line_items: invoice
            .line_items
            .iter()
            .map(|line| FormattedLineItem {
                name: line.name.clone(),
                quantity: format_quantity(line.quantity),
                price: money(line.price),
                total: money(line.total),
            })
            .collect(),
        subtotal: money(invoice.subtotal),
        tax: money(invoice.tax),
        total: money(invoice.total),
    })
}

fn format_party(party: &Party) -> FormattedParty {
    FormattedParty {
        name: party.name.clone(),
        address_lines: party.address_lines(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InvoiceBuilder, LineItemBuilder, PartyBuilder};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn invoice(currency: &str) -> Invoice {
        InvoiceBuilder::new("INV-001", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .due_date(NaiveDate::from_ymd_opt(2024, 4, 4).unwrap())
            .currency(currency)
            .bill_from(PartyBuilder::new("Acme").build())
            .bill_to(PartyBuilder::new("Globex").build())
            .add_line(LineItemBuilder::new("Support", dec!(2.5), dec!(1000)).build())
            .tax(dec!(250))
            .build_unchecked()
            .unwrap()
    }

    #[test]
    fn empty_currency_renders_as_usd() {
        let view = format_invoice(&invoice("")).unwrap();
        assert_eq!(view.currency, "USD");
        assert_eq!(view.locale, "en-US");
        assert_eq!(view.invoice_date, "05 Mar 2024");
        assert_eq!(view.due_date, "04 Apr 2024");
        assert_eq!(view.line_items[0].quantity, "2.5");
        assert_eq!(view.line_items[0].price, "$1,000.00");
        assert_eq!(view.line_items[0].total, "$2,500.00");
        assert_eq!(view.subtotal, "$2,500.00");
        assert_eq!(view.tax, "$250.00");
        assert_eq!(view.total, "$2,750.00");
    }

    #[test]
    fn foreign_currency_keeps_us_grouping() {
        let view = format_invoice(&invoice("eur")).unwrap();
        assert_eq!(view.currency, "EUR");
        assert_eq!(view.total, "€2,750.00");
    }

    #[test]
    fn unknown_currency_fails() {
        assert_eq!(
            format_invoice(&invoice("ZZZ")),
            Err(FormatError::UnknownCurrency("ZZZ".into()))
        );
    }
}
