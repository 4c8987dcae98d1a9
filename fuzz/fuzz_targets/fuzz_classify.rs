#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let raw = qrbill::core::is_qr_iban(s);
        if let Ok(iban) = qrbill::core::Iban::parse(s) {
            assert_eq!(qrbill::core::classify(&iban).is_qr_iban, raw);
        }
    }
});
