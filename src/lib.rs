//! # invoicefmt
//!
//! Invoice data types plus the presentation helpers that turn them into
//! human-readable text: short dates (`05 Mar 2024`) and US-English
//! currency amounts (`$1,234.50`, `€1,234.50`, `CHF 1,234.50`).
//!
//! All monetary values use [`rust_decimal::Decimal`]. Output conventions are
//! fixed to the `en-US` locale regardless of the invoice currency.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use invoicefmt::core::*;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
//! assert_eq!(format_currency(dec!(1234.5), "USD").unwrap(), "$1,234.50");
//! assert_eq!(format_currency(dec!(1234.5), "").unwrap(), "$1,234.50");
//!
//! let invoice = InvoiceBuilder::new("INV-001", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
//!     .currency("EUR")
//!     .bill_from(PartyBuilder::new("Acme Studio").city("Austin").country("US").build())
//!     .bill_to(PartyBuilder::new("Globex Ltd").city("London").country("GB").build())
//!     .add_line(LineItemBuilder::new("Design work", dec!(10), dec!(150)).build())
//!     .tax(dec!(150))
//!     .build()
//!     .unwrap();
//!
//! let view = format_invoice(&invoice).unwrap();
//! assert_eq!(view.total, "€1,650.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, formatters, builders, validation |
//! | `json` | JSON import/export, including the legacy invoice shape |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
