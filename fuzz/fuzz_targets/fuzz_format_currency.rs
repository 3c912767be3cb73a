#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((amount, code)) = data.split_first_chunk::<8>() else {
        return;
    };
    let amount = f64::from_le_bytes(*amount);
    if let Ok(code) = std::str::from_utf8(code) {
        // Errors are fine, panics are bugs.
        let _ = invoicefmt::core::format_currency_f64(amount, code);
    }
});
