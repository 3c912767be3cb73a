//! Core invoice types, formatters, and validation.
//!
//! Formatting always follows `en-US` conventions; see [`LOCALE`].

mod builder;
pub mod currencies;
mod dates;
mod error;
mod format;
#[cfg(feature = "json")]
pub mod json;
mod legacy;
mod render;
mod types;
mod validation;

pub use builder::*;
pub use currencies::{Currency, is_known_currency_code, lookup_currency};
pub use dates::parse_date;
pub use error::*;
pub use format::*;
pub use legacy::*;
pub use render::*;
pub use types::*;
pub use validation::*;
