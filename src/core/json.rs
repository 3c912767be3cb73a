//! JSON import and export.
//!
//! Keys are camelCase. Dates are written as `YYYY-MM-DD` and read from any
//! form [`parse_date`](super::parse_date) accepts; amounts are written as
//! strings and read from either strings or numbers.

use serde_json::Value;
use tracing::debug;

use super::error::InvoiceError;
use super::legacy::LegacyInvoice;
use super::types::Invoice;

/// Serialize an invoice to compact JSON.
pub fn to_json(invoice: &Invoice) -> Result<String, InvoiceError> {
    serde_json::to_string(invoice).map_err(|e| InvoiceError::Json(e.to_string()))
}

/// Serialize an invoice to indented JSON.
pub fn to_json_pretty(invoice: &Invoice) -> Result<String, InvoiceError> {
    serde_json::to_string_pretty(invoice).map_err(|e| InvoiceError::Json(e.to_string()))
}

/// Parse an invoice in the current shape.
pub fn from_json(json: &str) -> Result<Invoice, InvoiceError> {
    serde_json::from_str(json).map_err(|e| InvoiceError::Json(e.to_string()))
}

/// Parse an invoice in either the current or the legacy shape.
///
/// A document with a `paymentDetails` object is read as a legacy invoice
/// and converted with [`LegacyInvoice::into_invoice`]; anything else must be
/// in the current shape. Errors name the field that failed.
pub fn parse_any_invoice(json: &str) -> Result<Invoice, InvoiceError> {
    let value: Value = serde_json::from_str(json).map_err(json_error)?;
    let legacy = value
        .as_object()
        .is_some_and(|doc| doc.contains_key("paymentDetails"));

    if legacy {
        let legacy: LegacyInvoice = serde_json::from_value(value).map_err(json_error)?;
        Ok(legacy.into_invoice())
    } else {
        serde_json::from_value(value).map_err(json_error)
    }
}

fn json_error(e: serde_json::Error) -> InvoiceError {
    debug!(error = %e, "invoice JSON rejected");
    InvoiceError::Json(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json() {
        assert!(matches!(from_json("{"), Err(InvoiceError::Json(_))));
        assert!(matches!(parse_any_invoice("[]"), Err(InvoiceError::Json(_))));
    }

    #[test]
    fn legacy_error_names_the_field() {
        let err = parse_any_invoice(r#"{"invoiceNumber": "1", "paymentDetails": {}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field"), "{err}");
    }
}
