#![no_main]

use libfuzzer_sys::fuzz_target;
use qrbill::core::{ChecksumPolicy, NoopObserver, ReferenceResolver, ReferenceType};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (raw, seed) = s.split_once('\n').unwrap_or((s, ""));

    // Errors are fine, panics are bugs.
    for policy in [ChecksumPolicy::Structural, ChecksumPolicy::Verify] {
        let resolver = ReferenceResolver::new()
            .observer(NoopObserver)
            .checksums(policy);
        if let Ok(r) = resolver.resolve(true, raw, seed) {
            assert_eq!(r.kind(), ReferenceType::QrReference);
            assert_eq!(r.value().len(), 27);
        }
        let _ = resolver.resolve(false, raw, seed);
    }
});
