use qrbill::core::*;
use rust_decimal_macros::dec;

fn main() {
    let resolver = ReferenceResolver::new();
    let iban = Iban::parse("CH93 0076 2011 6238 5295 7").expect("non-empty IBAN");

    // ── 1. Reference that fits no regime ──────────────────────────────
    println!("=== Invalid reference ===");
    for raw in ["12345", "RF1", "RF18-5390-0754", "210000000003139471430009017"] {
        match resolver.resolve_for(&iban, raw, "SINV-0001") {
            Ok(r) => println!("  {raw:?} -> {} {}", r.kind(), r.value()),
            Err(e) => println!("  {raw:?} -> {e}"),
        }
    }

    // ── 2. Checksum verification ──────────────────────────────────────
    println!("\n=== ChecksumPolicy::Verify ===");
    let strict = ReferenceResolver::new().checksums(ChecksumPolicy::Verify);
    for raw in ["RF18539007547034", "RF19539007547034"] {
        match strict.resolve_for(&iban, raw, "SINV-0001") {
            Ok(r) => println!("  {raw} -> accepted as {}", r.kind()),
            Err(e) => println!("  {raw} -> {e}"),
        }
    }

    // ── 3. Empty IBAN ─────────────────────────────────────────────────
    println!("\n=== Empty IBAN ===");
    match Iban::parse("   ") {
        Ok(i) => println!("  parsed {i} (unexpected)"),
        Err(e) => println!("  {e}"),
    }

    // ── 4. Unsupported currency ───────────────────────────────────────
    println!("\n=== Currency ===");
    for code in ["CHF", "eur", "USD"] {
        match Currency::from_code(code) {
            Some(c) => println!("  {code} -> {}", c.code()),
            None => println!("  {}", QrBillError::UnsupportedCurrency(code.into())),
        }
    }

    // ── 5. Context validation ─────────────────────────────────────────
    println!("\n=== Bill context ===");
    let result = BillContextBuilder::new(Currency::Chf)
        .amount(dec!(1000000000))
        .creditor(PartyBuilder::new("", AddressBuilder::new("Bern", "3011", "CH").build()).build())
        .debtor(PartyBuilder::new("Kunde", AddressBuilder::new("Atlantis", "0000", "XX").build()).build())
        .build_strict();
    match result {
        Ok(_) => println!("  context valid (unexpected)"),
        Err(e) => println!("  {e}"),
    }
}
