#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(invoice) = invoicefmt::core::json::parse_any_invoice(s) {
            let _ = invoicefmt::core::validate_invoice(&invoice);
            let _ = invoicefmt::core::format_invoice(&invoice);
        }
    }
});
