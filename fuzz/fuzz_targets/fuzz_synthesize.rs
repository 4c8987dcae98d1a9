#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(seed) = std::str::from_utf8(data) {
        let qrr = qrbill::core::synthesize_qrr(seed);
        assert!(qrbill::core::is_valid_qrr(&qrr));
        let _ = qrbill::core::creditor_reference(seed);
    }
});
