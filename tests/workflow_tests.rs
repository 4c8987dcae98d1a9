#![cfg(feature = "workflow")]

use std::sync::Mutex;

use async_trait::async_trait;
use qrbill::core::*;
use qrbill::workflow::*;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// Recording collaborators
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<(RenderRequest, String, Language)>>,
    fail: bool,
}

#[async_trait]
impl BillRenderer for RecordingRenderer {
    async fn render_bill(
        &self,
        request: &RenderRequest,
        document_id: &str,
        language: Language,
    ) -> Result<(), QrBillError> {
        if self.fail {
            return Err(QrBillError::Render("printer on fire".into()));
        }
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), document_id.to_string(), language));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    progress: Mutex<Vec<u8>>,
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn show_progress(&self, percent: u8, _message: &str) {
        self.progress.lock().unwrap().push(percent);
    }
}

#[derive(Default)]
struct RecordingObserver(Mutex<Vec<String>>);

impl ReferenceObserver for RecordingObserver {
    fn observe(&self, event: &ReferenceEvent<'_>) {
        self.0.lock().unwrap().push(event.name().to_string());
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const QR_IBAN: &str = "CH45 3080 8001 2345 6789 0";
const REGULAR_IBAN: &str = "CH93 0076 2011 6238 5295 7";

fn store(iban: Option<&str>) -> InMemoryDocumentStore {
    InMemoryDocumentStore::new()
        .with_bank_settings(BankSettings {
            company: "ACME AG".into(),
            bank_account: "ACME - PostFinance".into(),
        })
        .with_bank_account(BankAccount {
            name: "ACME - PostFinance".into(),
            iban: iban.map(str::to_string),
        })
        .with_address(AddressRecord {
            name: "ACME-Billing".into(),
            address_line1: Some("Bahnhofstrasse 1".into()),
            pincode: "8001".into(),
            city: "Zürich".into(),
            country: "Switzerland".into(),
        })
        .with_address(AddressRecord {
            name: "CUST-001-Billing".into(),
            address_line1: None,
            pincode: "9490".into(),
            city: "Vaduz".into(),
            country: "Liechtenstein".into(),
        })
        .with_country(CountryRecord {
            name: "Switzerland".into(),
            code: "ch".into(),
        })
        .with_country(CountryRecord {
            name: "Liechtenstein".into(),
            code: "li".into(),
        })
}

fn invoice(reference: &str) -> SalesInvoice {
    SalesInvoice {
        name: "SINV-0001".into(),
        docstatus: DocStatus::Draft,
        customer: "CUST-001".into(),
        customer_name: Some("Kunde Anstalt".into()),
        company: "ACME AG".into(),
        company_address: "ACME-Billing".into(),
        customer_address: "CUST-001-Billing".into(),
        currency: "CHF".into(),
        outstanding_amount: dec!(1250.50),
        language: "fr-CH".into(),
        reference_number_full: Some(reference.into()),
        esr_reference_code: None,
    }
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn qr_iban_synthesizes_and_renders() {
    let renderer = RecordingRenderer::default();
    let notifier = RecordingNotifier::default();
    let observer = RecordingObserver::default();
    let workflow = BillWorkflow::new(store(Some(QR_IBAN)), &renderer)
        .notifier(&notifier)
        .resolver(ReferenceResolver::new().observer(&observer));

    let outcome = workflow.generate(&invoice("")).await.unwrap();
    let BillOutcome::Rendered { request } = outcome else {
        panic!("expected a rendered bill");
    };

    assert_eq!(request.reference_type, ReferenceType::QrReference);
    assert_eq!(
        request.reference.as_deref(),
        Some("000000000000002818233100015")
    );
    assert_eq!(request.amount, Some(dec!(1250.50)));
    assert_eq!(request.creditor.account, "CH4530808001234567890");
    assert_eq!(request.creditor.country, "CH");
    assert_eq!(request.debtor.name, "Kunde Anstalt");
    assert_eq!(request.debtor.country, "LI");

    let calls = renderer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "SINV-0001");
    assert_eq!(calls[0].2, Language::French);

    assert_eq!(*notifier.progress.lock().unwrap(), vec![10, 40]);
    assert!(notifier.errors.lock().unwrap().is_empty());
    assert_eq!(
        *observer.0.lock().unwrap(),
        vec!["reference.synthesized".to_string()]
    );
}

#[tokio::test]
async fn regular_iban_scor() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(store(Some(REGULAR_IBAN)), &renderer);

    let outcome = workflow
        .generate(&invoice("RF18 5390 0754 7034"))
        .await
        .unwrap();
    let BillOutcome::Rendered { request } = outcome else {
        panic!("expected a rendered bill");
    };
    assert_eq!(request.reference_type, ReferenceType::CreditorReference);
    assert_eq!(request.reference.as_deref(), Some("RF18539007547034"));
}

#[tokio::test]
async fn customer_id_used_without_customer_name() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(store(Some(REGULAR_IBAN)), &renderer);
    let mut inv = invoice("");
    inv.customer_name = None;

    let BillOutcome::Rendered { request } = workflow.generate(&inv).await.unwrap() else {
        panic!("expected a rendered bill");
    };
    assert_eq!(request.debtor.name, "CUST-001");
    assert_eq!(request.reference, None);
}

#[tokio::test]
async fn finalized_invoice_skipped() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(InMemoryDocumentStore::new(), &renderer);
    let mut inv = invoice("");
    inv.docstatus = DocStatus::Submitted;

    assert_eq!(workflow.generate(&inv).await.unwrap(), BillOutcome::Skipped);
    assert!(renderer.calls.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_reference_halts_before_render() {
    let renderer = RecordingRenderer::default();
    let notifier = RecordingNotifier::default();
    let workflow = BillWorkflow::new(store(Some(REGULAR_IBAN)), &renderer).notifier(&notifier);

    let err = workflow.generate(&invoice("12345")).await.unwrap_err();
    assert_eq!(
        err,
        QrBillError::InvalidReferenceFormat {
            input: "12345".into()
        }
    );
    assert!(renderer.calls.lock().unwrap().is_empty());
    assert_eq!(*notifier.progress.lock().unwrap(), vec![10]);

    let errors = notifier.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("12345"));
}

#[tokio::test]
async fn unsupported_currency_aborts() {
    let renderer = RecordingRenderer::default();
    let notifier = RecordingNotifier::default();
    let workflow = BillWorkflow::new(store(Some(QR_IBAN)), &renderer).notifier(&notifier);
    let mut inv = invoice("");
    inv.currency = "USD".into();

    let err = workflow.generate(&inv).await.unwrap_err();
    assert_eq!(err, QrBillError::UnsupportedCurrency("USD".into()));
    assert!(renderer.calls.lock().unwrap().is_empty());
    assert_eq!(notifier.errors.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_address_is_not_found() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(store(Some(QR_IBAN)), &renderer);
    let mut inv = invoice("");
    inv.customer_address = "Ghost-Billing".into();

    let err = workflow.generate(&inv).await.unwrap_err();
    assert_eq!(err, QrBillError::not_found("Address", "Ghost-Billing"));
}

#[tokio::test]
async fn missing_iban_is_missing_field() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(store(None), &renderer);

    let err = workflow.generate(&invoice("")).await.unwrap_err();
    assert_eq!(err, QrBillError::missing("Bank Account", "iban"));
}

#[tokio::test]
async fn strict_checksums_reject_bad_qrr() {
    let renderer = RecordingRenderer::default();
    let workflow = BillWorkflow::new(store(Some(QR_IBAN)), &renderer)
        .resolver(ReferenceResolver::new().checksums(ChecksumPolicy::Verify));

    let err = workflow
        .generate(&invoice("210000000003139471430009018"))
        .await
        .unwrap_err();
    assert!(matches!(err, QrBillError::InvalidChecksum { .. }));
}

#[tokio::test]
async fn render_failure_propagates() {
    let renderer = RecordingRenderer {
        fail: true,
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();
    let workflow = BillWorkflow::new(store(Some(QR_IBAN)), &renderer).notifier(&notifier);

    let err = workflow.generate(&invoice("")).await.unwrap_err();
    assert_eq!(err, QrBillError::Render("printer on fire".into()));
    assert_eq!(*notifier.progress.lock().unwrap(), vec![10, 40]);
}
