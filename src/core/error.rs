use thiserror::Error;

/// Errors raised by the currency formatter.
///
/// Unparseable dates are not an error: [`format_date`](super::format_date)
/// renders them as [`INVALID_DATE`](super::INVALID_DATE).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Currency code is not three ASCII letters.
    #[error("invalid currency code '{0}': expected three ASCII letters")]
    InvalidCurrencyCode(String),

    /// Currency code is well-formed but not a known ISO 4217 code.
    #[error("unknown currency code '{0}': not an ISO 4217 currency")]
    UnknownCurrency(String),

    /// Floating point amount is NaN, infinite, or outside the decimal range
    /// (magnitude above `Decimal::MAX`, about 7.9e28).
    #[error("amount {0} cannot be represented as a decimal")]
    AmountOutOfRange(f64),
}

/// Errors that can occur during invoice construction or processing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Amount or currency could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(String),
}

/// A single validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "line_items[2].total").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Stable identifier of the failed check (e.g. "line-total").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a finding without a rule id.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a finding tagged with the id of the check that failed.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
