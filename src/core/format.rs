use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace};

use super::currencies::{Currency, lookup_currency};
use super::dates::parse_date;
use super::error::FormatError;

/// Locale whose conventions every formatter follows. Not configurable.
pub const LOCALE: &str = "en-US";

/// Currency substituted when the caller passes an empty currency code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Output of [`format_date`] for input that is not a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a date string as `DD Mon YYYY`, e.g. `"2024-03-05"` → `"05 Mar 2024"`.
///
/// Input that cannot be parsed yields [`INVALID_DATE`] instead of an error.
/// See [`parse_date`] for the accepted input forms.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => format_naive_date(date),
        None => {
            debug!(input, "unparseable date string");
            INVALID_DATE.to_string()
        }
    }
}

/// Format a calendar date as `DD Mon YYYY`.
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format `amount` in `currency` using US-English conventions.
///
/// An empty `currency` falls back to [`DEFAULT_CURRENCY`]. Codes are
/// case-insensitive. The amount is rounded half away from zero to the
/// currency's minor units and grouped with `,` every three digits.
///
/// ```
/// use invoicefmt::core::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.5), "USD").unwrap(), "$1,234.50");
/// assert_eq!(format_currency(dec!(1234.5), "EUR").unwrap(), "€1,234.50");
/// assert_eq!(format_currency(dec!(-5), "").unwrap(), "-$5.00");
/// assert!(format_currency(dec!(100), "ZZZ").is_err());
/// ```
pub fn format_currency(amount: Decimal, currency: &str) -> Result<String, FormatError> {
    let currency = resolve_currency(currency)?;
    Ok(format_amount(amount, currency))
}

/// Like [`format_currency`] for binary floating point amounts.
///
/// The exact value of the float is used, so `1.005` (stored as
/// `1.00499999…`) formats as `$1.00`.
///
/// Only amounts within the `Decimal` range are accepted: magnitudes above
/// `Decimal::MAX` (79,228,162,514,264,337,593,543,950,335, about 7.9e28),
/// NaN and infinities return [`FormatError::AmountOutOfRange`].
pub fn format_currency_f64(amount: f64, currency: &str) -> Result<String, FormatError> {
    let amount = Decimal::from_f64_retain(amount).ok_or(FormatError::AmountOutOfRange(amount))?;
    format_currency(amount, currency)
}

/// Map a caller-supplied code to a table entry, applying the USD default.
pub(crate) fn resolve_currency(code: &str) -> Result<&'static Currency, FormatError> {
    let code = if code.is_empty() {
        trace!(default = DEFAULT_CURRENCY, "empty currency code");
        DEFAULT_CURRENCY
    } else {
        code
    };

    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        debug!(code, "malformed currency code");
        return Err(FormatError::InvalidCurrencyCode(code.to_string()));
    }

    let upper = code.to_ascii_uppercase();
    lookup_currency(&upper).ok_or_else(|| {
        debug!(code = %upper, "currency code not in ISO 4217 table");
        FormatError::UnknownCurrency(upper)
    })
}

pub(crate) fn format_amount(amount: Decimal, currency: &Currency) -> String {
    let rounded = amount.round_dp_with_strategy(
        currency.minor_units,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let digits = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = currency.minor_units as usize
    );
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let symbol = currency.display_symbol();
    let mut out = String::with_capacity(digits.len() + symbol.len() + 8);
    if amount.is_sign_negative() && !amount.is_zero() {
        out.push('-');
    }
    out.push_str(symbol);
    // Alphabetic symbols ("CHF", "CFPF") are separated from the digits.
    if symbol.ends_with(|c: char| c.is_alphabetic()) {
        out.push('\u{a0}');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format a quantity with US grouping and without trailing zeros.
pub(crate) fn format_quantity(quantity: Decimal) -> String {
    let digits = quantity.normalize().abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if quantity.is_sign_negative() && !quantity.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
