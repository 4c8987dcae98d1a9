use qrbill::core::*;
use rust_decimal_macros::dec;

fn setup_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    setup_logging();

    let ctx = BillContextBuilder::new(Currency::Chf)
        .amount(dec!(1949.75))
        .creditor(
            PartyBuilder::new(
                "Robert Schneider AG",
                AddressBuilder::new("Biel", "2501", "CH")
                    .street("Rue du Lac")
                    .building_number("1268")
                    .build(),
            )
            .build(),
        )
        .debtor(
            PartyBuilder::new(
                "Pia-Maria Rutschmann-Schnyder",
                AddressBuilder::new("Rorschach", "9400", "CH")
                    .street("Grosse Marktgasse")
                    .building_number("28")
                    .build(),
            )
            .build(),
        )
        .message("Auftrag vom 15.06.2024")
        .build_strict()
        .expect("valid bill context");

    let resolver = ReferenceResolver::new();

    // ── QR-IBAN: reference synthesized from the document name ─────────
    let qr_iban = Iban::parse("CH44 3199 9123 0008 8901 2").expect("non-empty IBAN");
    println!("=== {} ===", qr_iban.formatted());
    let c = classify(&qr_iban);
    println!("  IID {:?}, QR-IBAN: {}", c.institution_id, c.is_qr_iban);

    let reference = resolver
        .resolve_for(&qr_iban, "", "SINV-2024-00017")
        .expect("QR-IBAN references always resolve");
    println!("  {} {}", reference.kind(), reference.value());

    // ── Regular IBAN with an ISO 11649 creditor reference ────────────
    let iban = Iban::parse("CH93 0076 2011 6238 5295 7").expect("non-empty IBAN");
    println!("\n=== {} ===", iban.formatted());
    let scor = creditor_reference("SINV202400017").expect("alphanumeric payload");
    let reference = resolver
        .resolve_for(&iban, &scor, "SINV-2024-00017")
        .expect("generated creditor reference");
    println!("  {} {}", reference.kind(), reference.value());

    let request = assemble(&ctx, &iban, &reference);
    println!("\n{request:#?}");
}
