use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::InvoiceError;
use super::types::*;
use super::validation;

/// Builder for constructing consistent invoices.
///
/// Line totals, the subtotal and the grand total are derived; only the tax
/// amount is supplied by the caller.
///
/// ```
/// use invoicefmt::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new("INV-001", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
///     .due_date(NaiveDate::from_ymd_opt(2024, 4, 4).unwrap())
///     .reference("PO-7781")
///     .bill_from(PartyBuilder::new("Acme Studio").city("Austin").build())
///     .bill_to(PartyBuilder::new("Globex Ltd").city("London").build())
///     .add_line(LineItemBuilder::new("Design", dec!(10), dec!(150)).build())
///     .tax(dec!(120))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.total, dec!(1620));
/// ```
pub struct InvoiceBuilder {
    invoice_number: String,
    reference: String,
    currency: String,
    invoice_date: NaiveDate,
    due_date: Option<NaiveDate>,
    bill_from: Option<Party>,
    bill_to: Option<Party>,
    line_items: Vec<LineItem>,
    tax: Decimal,
}

impl InvoiceBuilder {
    /// Start an invoice. The due date defaults to the invoice date and the
    /// currency to empty (formatted as USD).
    pub fn new(invoice_number: impl Into<String>, invoice_date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            reference: String::new(),
            currency: String::new(),
            invoice_date,
            due_date: None,
            bill_from: None,
            bill_to: None,
            line_items: Vec::new(),
            tax: Decimal::ZERO,
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn bill_from(mut self, party: Party) -> Self {
        self.bill_from = Some(party);
        self
    }

    pub fn bill_to(mut self, party: Party) -> Self {
        self.bill_to = Some(party);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    /// Tax amount added on top of the subtotal.
    pub fn tax(mut self, amount: Decimal) -> Self {
        self.tax = amount;
        self
    }

    /// Build the invoice, deriving totals and running validation.
    /// Returns all validation findings (not just the first).
    pub fn build(self) -> Result<Invoice, InvoiceError> {
        let invoice = self.build_unchecked()?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            debug!(
                invoice_number = %invoice.invoice_number,
                findings = errors.len(),
                "invoice rejected"
            );
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(InvoiceError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation, useful for importing external data.
    pub fn build_unchecked(self) -> Result<Invoice, InvoiceError> {
        let bill_from = self
            .bill_from
            .ok_or_else(|| InvoiceError::Builder("bill_from party is required".into()))?;
        let bill_to = self
            .bill_to
            .ok_or_else(|| InvoiceError::Builder("bill_to party is required".into()))?;

        let (subtotal, total) = self
            .line_items
            .iter()
            .try_fold(Decimal::ZERO, |acc, l| acc.checked_add(l.total))
            .and_then(|subtotal| Some((subtotal, subtotal.checked_add(self.tax)?)))
            .ok_or_else(|| InvoiceError::Builder("invoice total overflows".into()))?;

        Ok(Invoice {
            invoice_number: self.invoice_number,
            reference: self.reference,
            currency: self.currency,
            invoice_date: self.invoice_date,
            due_date: self.due_date.unwrap_or(self.invoice_date),
            bill_from,
            bill_to,
            line_items: self.line_items,
            subtotal,
            tax: self.tax,
            total,
        })
    }
}

/// Builder for a bill-from or bill-to [`Party`].
pub struct PartyBuilder {
    name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    country: String,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            country: String::new(),
        }
    }

    /// Street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
        }
    }
}

/// Builder for [`LineItem`]; the line total is quantity × price.
pub struct LineItemBuilder {
    name: String,
    quantity: Decimal,
    price: Decimal,
}

impl LineItemBuilder {
    pub fn new(name: impl Into<String>, quantity: Decimal, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// A product beyond the decimal range saturates at `Decimal::MAX` (or
    /// `MIN`); [`validate_arithmetic`](super::validate_arithmetic) reports it.
    pub fn build(self) -> LineItem {
        LineItem {
            name: self.name,
            total: self.quantity.saturating_mul(self.price),
            quantity: self.quantity,
            price: self.price,
        }
    }
}
