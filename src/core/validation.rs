use rust_decimal::Decimal;

use super::error::{FormatError, ValidationError};
use super::format::resolve_currency;
use super::types::*;

/// Check an invoice for internal consistency.
/// Returns all findings (not just the first); an empty vector means valid.
///
/// Checked: non-empty invoice number and party names, currency empty or a
/// known ISO 4217 code, due date not before invoice date, each line total
/// equal to quantity × price, subtotal equal to the sum of line totals, and
/// total equal to subtotal + tax.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.invoice_number.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "invoice_number",
            "invoice number must not be empty",
            "invoice-number",
        ));
    }

    if !invoice.currency.is_empty() {
        match resolve_currency(&invoice.currency) {
            Ok(_) => {}
            Err(FormatError::UnknownCurrency(code)) => errors.push(ValidationError::with_rule(
                "currency",
                format!("currency code '{code}' is not a known ISO 4217 code"),
                "currency",
            )),
            Err(e) => errors.push(ValidationError::with_rule(
                "currency",
                e.to_string(),
                "currency",
            )),
        }
    }

    if invoice.due_date < invoice.invoice_date {
        errors.push(ValidationError::with_rule(
            "due_date",
            format!(
                "due date {} is before invoice date {}",
                invoice.due_date, invoice.invoice_date
            ),
            "due-date",
        ));
    }

    validate_party(&invoice.bill_from, "bill_from", &mut errors);
    validate_party(&invoice.bill_to, "bill_to", &mut errors);

    errors.extend(validate_arithmetic(invoice));

    errors
}

/// Check the derived amounts only: line totals, subtotal and total.
pub fn validate_arithmetic(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, line) in invoice.line_items.iter().enumerate() {
        match line.quantity.checked_mul(line.price) {
            Some(expected) if expected == line.total => {}
            Some(expected) => errors.push(ValidationError::with_rule(
                format!("line_items[{i}].total"),
                format!(
                    "line total {} does not match quantity {} × price {} = {}",
                    line.total, line.quantity, line.price, expected
                ),
                "line-total",
            )),
            None => errors.push(ValidationError::with_rule(
                format!("line_items[{i}].total"),
                "quantity × price overflows",
                "line-total",
            )),
        }
    }

    match checked_sum(invoice.line_items.iter().map(|l| l.total)) {
        Some(expected) if expected == invoice.subtotal => {}
        Some(expected) => errors.push(ValidationError::with_rule(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                invoice.subtotal, expected
            ),
            "subtotal",
        )),
        None => errors.push(ValidationError::with_rule(
            "subtotal",
            "sum of line totals overflows",
            "subtotal",
        )),
    }

    match invoice.subtotal.checked_add(invoice.tax) {
        Some(expected) if expected == invoice.total => {}
        Some(expected) => errors.push(ValidationError::with_rule(
            "total",
            format!(
                "total {} does not match subtotal {} + tax {} = {}",
                invoice.total, invoice.subtotal, invoice.tax, expected
            ),
            "total",
        )),
        None => errors.push(ValidationError::with_rule(
            "total",
            "subtotal + tax overflows",
            "total",
        )),
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    if party.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            "party name must not be empty",
            "party-name",
        ));
    }
}

fn checked_sum(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.fold(Some(Decimal::ZERO), |acc, v| acc?.checked_add(v))
}
