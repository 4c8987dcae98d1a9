use qrbill::core::*;
use rust_decimal_macros::dec;

const QR_IBAN: &str = "CH45 3080 8001 2345 6789 0";
const REGULAR_IBAN: &str = "CH93 0076 2011 6238 5295 7";

fn resolver() -> ReferenceResolver<NoopObserver> {
    ReferenceResolver::new().observer(NoopObserver)
}

fn iban(s: &str) -> Iban {
    Iban::parse(s).unwrap()
}

fn context() -> BillContext {
    BillContextBuilder::new(Currency::Chf)
        .amount(dec!(3949.75))
        .creditor(
            PartyBuilder::new(
                "Muster Treuhand AG",
                AddressBuilder::new("Zürich", "8005", "CH")
                    .street("Limmatstrasse")
                    .building_number("12")
                    .build(),
            )
            .build(),
        )
        .debtor(
            PartyBuilder::new(
                "Hans Muster",
                AddressBuilder::new("Vaduz", "9490", "LI")
                    .street("Städtle 3")
                    .build(),
            )
            .build(),
        )
        .build_strict()
        .unwrap()
}

// --- Classification ---

#[test]
fn scenario_ibans_classified() {
    let qr = classify(&iban(QR_IBAN));
    assert!(qr.is_qr_iban);
    assert_eq!(qr.institution_id, Some(30808));

    let regular = classify(&iban(REGULAR_IBAN));
    assert!(!regular.is_qr_iban);
    assert_eq!(regular.institution_id, Some(762));
}

#[test]
fn liechtenstein_qr_iban() {
    // LI uses the same IID scheme
    assert!(is_qr_iban("LI21 3088 1000 0000 0000 0"));
}

// --- Scenario 1: QR-IBAN, no reference ---

#[test]
fn qr_iban_empty_reference_synthesized() {
    let r = resolver()
        .resolve_for(&iban(QR_IBAN), "", "SINV-0001")
        .unwrap();
    assert_eq!(r.kind(), ReferenceType::QrReference);
    assert_eq!(r.value(), "000000000000002818233100015");
    assert_eq!(r.value(), synthesize_qrr("SINV-0001"));
    assert!(r.is_synthesized());
    assert!(is_valid_qrr(r.value()));
}

// --- Scenario 2: QR-IBAN, 27-digit reference ---

#[test]
fn qr_iban_27_digits_verbatim() {
    let r = resolver()
        .resolve_for(&iban(QR_IBAN), "210000000003139471430009017", "SINV-0001")
        .unwrap();
    assert_eq!(r.kind(), ReferenceType::QrReference);
    assert_eq!(r.value(), "210000000003139471430009017");
    assert!(!r.is_synthesized());
}

// --- Scenario 3: regular IBAN, SCOR ---

#[test]
fn regular_iban_scor() {
    let r = resolver()
        .resolve_for(&iban(REGULAR_IBAN), "RF18539007547034", "SINV-0001")
        .unwrap();
    assert_eq!(r.kind(), ReferenceType::CreditorReference);
    assert_eq!(r.value(), "RF18539007547034");
}

// --- Scenario 4: regular IBAN, no reference ---

#[test]
fn regular_iban_empty_is_non() {
    let r = resolver()
        .resolve_for(&iban(REGULAR_IBAN), "", "SINV-0001")
        .unwrap();
    assert_eq!(r.kind(), ReferenceType::NoReference);
    assert_eq!(r.value(), "");
}

// --- Scenario 5: regular IBAN, invalid reference ---

#[test]
fn regular_iban_invalid_reference() {
    let err = resolver()
        .resolve_for(&iban(REGULAR_IBAN), "12345", "SINV-0001")
        .unwrap_err();
    assert_eq!(
        err,
        QrBillError::InvalidReferenceFormat {
            input: "12345".into()
        }
    );
    assert!(err.to_string().contains("\"12345\""));
}

#[test]
fn invalid_scor_not_downgraded_to_non() {
    // a QRR reference on a regular IBAN is an error, not NON
    assert!(matches!(
        resolver().resolve_for(&iban(REGULAR_IBAN), "210000000003139471430009017", "X"),
        Err(QrBillError::InvalidReferenceFormat { .. })
    ));
}

#[test]
fn resolve_is_idempotent() {
    for (ib, reference) in [
        (QR_IBAN, ""),
        (QR_IBAN, "2100 0000 0003 1394 7143 0009 017"),
        (REGULAR_IBAN, "RF18 5390 0754 7034"),
        (REGULAR_IBAN, ""),
        (REGULAR_IBAN, "nope"),
    ] {
        let a = resolver().resolve_for(&iban(ib), reference, "SINV-0042");
        let b = resolver().resolve_for(&iban(ib), reference, "SINV-0042");
        assert_eq!(a, b);
    }
}

#[test]
fn default_resolver_function() {
    let r = resolve_reference(true, "", "SINV-0001").unwrap();
    assert_eq!(r.value(), "000000000000002818233100015");
}

// --- Assembly ---

#[test]
fn full_pipeline_qrr() {
    let account = iban(QR_IBAN);
    let reference = resolver().resolve_for(&account, "", "SINV-0001").unwrap();
    let request = assemble(&context(), &account, &reference);

    assert_eq!(request.currency, Currency::Chf);
    assert_eq!(request.amount, Some(dec!(3949.75)));
    assert_eq!(request.reference_type, ReferenceType::QrReference);
    assert_eq!(
        request.reference.as_deref(),
        Some("000000000000002818233100015")
    );
    assert_eq!(request.creditor.account, "CH4530808001234567890");
    assert_eq!(request.creditor.name, "Muster Treuhand AG");
    assert_eq!(request.debtor.country, "LI");
    assert_eq!(request.debtor.address.as_deref(), Some("Städtle 3"));
}

#[test]
fn full_pipeline_non_json() {
    let account = iban(REGULAR_IBAN);
    let reference = resolver().resolve_for(&account, "  ", "SINV-0001").unwrap();
    let json = serde_json::to_value(assemble(&context(), &account, &reference)).unwrap();

    assert_eq!(json["referenceType"], "NON");
    assert!(json.get("reference").is_none());
    assert_eq!(json["creditor"]["city"], "Zürich");
}

#[test]
fn eur_bill_without_amount() {
    let mut ctx = context();
    ctx.currency = Currency::Eur;
    ctx.amount = None;
    let account = iban(REGULAR_IBAN);
    let reference = resolver().resolve_for(&account, "", "X").unwrap();
    let json = serde_json::to_value(assemble(&ctx, &account, &reference)).unwrap();

    assert_eq!(json["currency"], "EUR");
    assert!(json.get("amount").is_none());
}
