//! Property-based tests for the formatters and the builder.

use chrono::{Datelike, NaiveDate};
use invoicefmt::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Amounts with up to 4 decimal places, within ±10^12.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000_0000i64..1_000_000_000_000_0000i64).prop_map(|n| Decimal::new(n, 4))
}

fn arb_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CHF", "KWD", "INR", "CAD"])
}

/// Strip symbol, sign, grouping and separator, leaving only digits.
fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

proptest! {
    /// Every valid ISO date formats as `DD Mon YYYY` with the right parts.
    #[test]
    fn iso_dates_format_as_dd_mon_yyyy(d in arb_date()) {
        let out = format_date(&d.format("%Y-%m-%d").to_string());
        let parts: Vec<&str> = out.split(' ').collect();
        prop_assert_eq!(parts.len(), 3);
        prop_assert_eq!(parts[0].len(), 2);
        prop_assert_eq!(parts[0].parse::<u32>().unwrap(), d.day());
        prop_assert_eq!(parts[1], MONTHS[d.month0() as usize]);
        prop_assert_eq!(parts[2].len(), 4);
        prop_assert_eq!(parts[2].parse::<i32>().unwrap(), d.year());
    }

    /// Arbitrary text never panics and yields either a date or the sentinel.
    #[test]
    fn arbitrary_text_never_panics(s in ".{0,40}") {
        let out = format_date(&s);
        prop_assert!(out == INVALID_DATE || out.split(' ').count() == 3);
    }

    /// Empty currency is always the same as USD.
    #[test]
    fn empty_currency_is_usd(amount in arb_amount()) {
        prop_assert_eq!(
            format_currency(amount, "").unwrap(),
            format_currency(amount, "USD").unwrap()
        );
    }

    /// The digits of the output are the rounded amount's digits.
    #[test]
    fn output_digits_match_rounded_amount(amount in arb_amount(), code in arb_code()) {
        let currency = lookup_currency(code).unwrap();
        let out = format_currency(amount, code).unwrap();
        let rounded = amount
            .round_dp_with_strategy(currency.minor_units, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            .abs();
        let expected = format!("{:.prec$}", rounded, prec = currency.minor_units as usize);
        prop_assert_eq!(digits_only(&out), digits_only(&expected));
        prop_assert!(out.contains(currency.display_symbol()));
        prop_assert_eq!(out.starts_with('-'), amount.is_sign_negative() && !amount.is_zero());
    }

    /// Integer part is grouped in threes with commas.
    #[test]
    fn grouping_is_us_style(amount in arb_amount()) {
        let out = format_currency(amount, "USD").unwrap();
        let body = out.trim_start_matches('-').trim_start_matches('$');
        let (int_part, frac_part) = body.split_once('.').unwrap();
        prop_assert_eq!(frac_part.len(), 2);
        let groups: Vec<&str> = int_part.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for g in &groups[1..] {
            prop_assert_eq!(g.len(), 3);
        }
    }

    /// Well-formed codes outside the table are rejected.
    #[test]
    fn unknown_codes_error(code in "[A-Z]{3}") {
        let result = format_currency(Decimal::ONE, &code);
        prop_assert_eq!(result.is_ok(), is_known_currency_code(&code));
    }

    /// Builder output always passes validation.
    #[test]
    fn built_invoices_are_consistent(
        lines in prop::collection::vec((1i64..10_000, 0i64..1_000_000), 0..20),
        tax in 0i64..1_000_000,
        code in arb_code(),
    ) {
        let mut builder = InvoiceBuilder::new("INV-P", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .currency(code)
            .bill_from(PartyBuilder::new("Acme").build())
            .bill_to(PartyBuilder::new("Globex").build())
            .tax(Decimal::new(tax, 2));
        for (i, (qty, price)) in lines.iter().enumerate() {
            builder = builder.add_line(
                LineItemBuilder::new(format!("item {i}"), Decimal::new(*qty, 1), Decimal::new(*price, 2)).build(),
            );
        }
        let inv = builder.build().unwrap();
        prop_assert!(validate_invoice(&inv).is_empty());
        prop_assert_eq!(inv.total, inv.subtotal + inv.tax);
        prop_assert!(format_invoice(&inv).is_ok());
    }
}
