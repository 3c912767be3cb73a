//! ISO 4217 currency table.
//!
//! Each entry carries the number of fraction digits shown when formatting
//! (CLDR digits, which differ from ISO 4217 for a handful of currencies
//! such as ISK and IQD) and the English display symbol where one exists.
//! Currencies without an English symbol are displayed by their code.

/// A currency known to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// ISO 4217 alphabetic code, upper case.
    pub code: &'static str,
    /// Fraction digits shown in formatted amounts.
    pub minor_units: u32,
    /// English display symbol (e.g. "$", "€", "CA$").
    pub symbol: Option<&'static str>,
}

impl Currency {
    const fn new(code: &'static str, minor_units: u32, symbol: Option<&'static str>) -> Self {
        Self {
            code,
            minor_units,
            symbol,
        }
    }

    /// Symbol used when formatting: the English symbol, or the code itself.
    pub fn display_symbol(&self) -> &'static str {
        self.symbol.unwrap_or(self.code)
    }
}

/// Look up a currency by its upper-case ISO 4217 code.
pub fn lookup_currency(code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup_currency(code).is_some()
}

/// ISO 4217 currencies, sorted by code for binary search.
static CURRENCIES: &[Currency] = &[
    Currency::new("AED", 2, None),
    Currency::new("AFN", 0, None),
    Currency::new("ALL", 0, None),
    Currency::new("AMD", 2, None),
    Currency::new("ANG", 2, None),
    Currency::new("AOA", 2, None),
    Currency::new("ARS", 2, None),
    Currency::new("AUD", 2, Some("A$")),
    Currency::new("AWG", 2, None),
    Currency::new("AZN", 2, None),
    Currency::new("BAM", 2, None),
    Currency::new("BBD", 2, None),
    Currency::new("BDT", 2, None),
    Currency::new("BGN", 2, None),
    Currency::new("BHD", 3, None),
    Currency::new("BIF", 0, None),
    Currency::new("BMD", 2, None),
    Currency::new("BND", 2, None),
    Currency::new("BOB", 2, None),
    Currency::new("BOV", 2, None),
    Currency::new("BRL", 2, Some("R$")),
    Currency::new("BSD", 2, None),
    Currency::new("BTN", 2, None),
    Currency::new("BWP", 2, None),
    Currency::new("BYN", 2, None),
    Currency::new("BZD", 2, None),
    Currency::new("CAD", 2, Some("CA$")),
    Currency::new("CDF", 2, None),
    Currency::new("CHE", 2, None),
    Currency::new("CHF", 2, None),
    Currency::new("CHW", 2, None),
    Currency::new("CLF", 4, None),
    Currency::new("CLP", 0, None),
    Currency::new("CNY", 2, Some("CN¥")),
    Currency::new("COP", 2, None),
    Currency::new("COU", 2, None),
    Currency::new("CRC", 2, None),
    Currency::new("CUC", 2, None),
    Currency::new("CUP", 2, None),
    Currency::new("CVE", 2, None),
    Currency::new("CZK", 2, None),
    Currency::new("DJF", 0, None),
    Currency::new("DKK", 2, None),
    Currency::new("DOP", 2, None),
    Currency::new("DZD", 2, None),
    Currency::new("EGP", 2, None),
    Currency::new("ERN", 2, None),
    Currency::new("ETB", 2, None),
    Currency::new("EUR", 2, Some("€")),
    Currency::new("FJD", 2, None),
    Currency::new("FKP", 2, None),
    Currency::new("GBP", 2, Some("£")),
    Currency::new("GEL", 2, None),
    Currency::new("GHS", 2, None),
    Currency::new("GIP", 2, None),
    Currency::new("GMD", 2, None),
    Currency::new("GNF", 0, None),
    Currency::new("GTQ", 2, None),
    Currency::new("GYD", 2, None),
    Currency::new("HKD", 2, Some("HK$")),
    Currency::new("HNL", 2, None),
    Currency::new("HTG", 2, None),
    Currency::new("HUF", 2, None),
    Currency::new("IDR", 2, None),
    Currency::new("ILS", 2, Some("₪")),
    Currency::new("INR", 2, Some("₹")),
    Currency::new("IQD", 0, None),
    Currency::new("IRR", 0, None),
    Currency::new("ISK", 0, None),
    Currency::new("JMD", 2, None),
    Currency::new("JOD", 3, None),
    Currency::new("JPY", 0, Some("¥")),
    Currency::new("KES", 2, None),
    Currency::new("KGS", 2, None),
    Currency::new("KHR", 2, None),
    Currency::new("KMF", 0, None),
    Currency::new("KPW", 0, None),
    Currency::new("KRW", 0, Some("₩")),
    Currency::new("KWD", 3, None),
    Currency::new("KYD", 2, None),
    Currency::new("KZT", 2, None),
    Currency::new("LAK", 0, None),
    Currency::new("LBP", 0, None),
    Currency::new("LKR", 2, None),
    Currency::new("LRD", 2, None),
    Currency::new("LSL", 2, None),
    Currency::new("LYD", 3, None),
    Currency::new("MAD", 2, None),
    Currency::new("MDL", 2, None),
    Currency::new("MGA", 0, None),
    Currency::new("MKD", 2, None),
    Currency::new("MMK", 0, None),
    Currency::new("MNT", 2, None),
    Currency::new("MOP", 2, None),
    Currency::new("MRU", 2, None),
    Currency::new("MUR", 2, None),
    Currency::new("MVR", 2, None),
    Currency::new("MWK", 2, None),
    Currency::new("MXN", 2, Some("MX$")),
    Currency::new("MXV", 2, None),
    Currency::new("MYR", 2, None),
    Currency::new("MZN", 2, None),
    Currency::new("NAD", 2, None),
    Currency::new("NGN", 2, None),
    Currency::new("NIO", 2, None),
    Currency::new("NOK", 2, None),
    Currency::new("NPR", 2, None),
    Currency::new("NZD", 2, Some("NZ$")),
    Currency::new("OMR", 3, None),
    Currency::new("PAB", 2, None),
    Currency::new("PEN", 2, None),
    Currency::new("PGK", 2, None),
    Currency::new("PHP", 2, Some("₱")),
    Currency::new("PKR", 2, None),
    Currency::new("PLN", 2, None),
    Currency::new("PYG", 0, None),
    Currency::new("QAR", 2, None),
    Currency::new("RON", 2, None),
    Currency::new("RSD", 0, None),
    Currency::new("RUB", 2, None),
    Currency::new("RWF", 0, None),
    Currency::new("SAR", 2, None),
    Currency::new("SBD", 2, None),
    Currency::new("SCR", 2, None),
    Currency::new("SDG", 2, None),
    Currency::new("SEK", 2, None),
    Currency::new("SGD", 2, None),
    Currency::new("SHP", 2, None),
    Currency::new("SLE", 2, None),
    Currency::new("SLL", 0, None),
    Currency::new("SOS", 0, None),
    Currency::new("SRD", 2, None),
    Currency::new("SSP", 2, None),
    Currency::new("STN", 2, None),
    Currency::new("SVC", 2, None),
    Currency::new("SYP", 0, None),
    Currency::new("SZL", 2, None),
    Currency::new("THB", 2, None),
    Currency::new("TJS", 2, None),
    Currency::new("TMT", 2, None),
    Currency::new("TND", 3, None),
    Currency::new("TOP", 2, None),
    Currency::new("TRY", 2, None),
    Currency::new("TTD", 2, None),
    Currency::new("TWD", 2, Some("NT$")),
    Currency::new("TZS", 2, None),
    Currency::new("UAH", 2, None),
    Currency::new("UGX", 0, None),
    Currency::new("USD", 2, Some("$")),
    Currency::new("USN", 2, None),
    Currency::new("UYI", 0, None),
    Currency::new("UYU", 2, None),
    Currency::new("UYW", 4, None),
    Currency::new("UZS", 2, None),
    Currency::new("VED", 2, None),
    Currency::new("VES", 2, None),
    Currency::new("VND", 0, Some("₫")),
    Currency::new("VUV", 0, None),
    Currency::new("WST", 2, None),
    Currency::new("XAF", 0, Some("FCFA")),
    Currency::new("XAG", 2, None),
    Currency::new("XAU", 2, None),
    Currency::new("XBA", 2, None),
    Currency::new("XBB", 2, None),
    Currency::new("XBC", 2, None),
    Currency::new("XBD", 2, None),
    Currency::new("XCD", 2, Some("EC$")),
    Currency::new("XCG", 2, None),
    Currency::new("XDR", 2, None),
    Currency::new("XOF", 0, Some("F CFA")),
    Currency::new("XPD", 2, None),
    Currency::new("XPF", 0, Some("CFPF")),
    Currency::new("XPT", 2, None),
    Currency::new("XSU", 2, None),
    Currency::new("XTS", 2, None),
    Currency::new("XUA", 2, None),
    Currency::new("XXX", 2, None),
    Currency::new("YER", 0, None),
    Currency::new("ZAR", 2, None),
    Currency::new("ZMW", 2, None),
    Currency::new("ZWG", 2, None),
    Currency::new("ZWL", 2, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies() {
        assert!(is_known_currency_code("EUR"));
        assert!(is_known_currency_code("USD"));
        assert!(is_known_currency_code("GBP"));
        assert!(is_known_currency_code("CHF"));
        assert!(is_known_currency_code("JPY"));
        assert!(is_known_currency_code("SEK"));
    }

    #[test]
    fn unknown_currencies() {
        assert!(!is_known_currency_code("ZZZ"));
        assert!(!is_known_currency_code(""));
        assert!(!is_known_currency_code("EURO"));
        assert!(!is_known_currency_code("eur"));
    }

    #[test]
    fn minor_units() {
        assert_eq!(lookup_currency("USD").unwrap().minor_units, 2);
        assert_eq!(lookup_currency("JPY").unwrap().minor_units, 0);
        assert_eq!(lookup_currency("KWD").unwrap().minor_units, 3);
        assert_eq!(lookup_currency("ISK").unwrap().minor_units, 0);
    }

    #[test]
    fn display_symbol_falls_back_to_code() {
        assert_eq!(lookup_currency("USD").unwrap().display_symbol(), "$");
        assert_eq!(lookup_currency("CAD").unwrap().display_symbol(), "CA$");
        assert_eq!(lookup_currency("CHF").unwrap().display_symbol(), "CHF");
    }

    #[test]
    fn table_is_sorted() {
        for window in CURRENCIES.windows(2) {
            assert!(
                window[0].code < window[1].code,
                "currency codes not sorted: {} >= {}",
                window[0].code,
                window[1].code
            );
        }
    }

    #[test]
    fn codes_are_three_upper_case_letters() {
        for c in CURRENCIES {
            assert_eq!(c.code.len(), 3, "{}", c.code);
            assert!(c.code.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.code);
        }
    }
}
