#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; unparseable input yields the sentinel string.
        let out = invoicefmt::core::format_date(s);
        assert!(!out.is_empty());
    }
});
