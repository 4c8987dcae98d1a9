use async_trait::async_trait;
use qrbill::core::*;
use qrbill::workflow::*;
use rust_decimal_macros::dec;

/// Prints the request instead of producing a PDF.
struct StdoutRenderer;

#[async_trait]
impl BillRenderer for StdoutRenderer {
    async fn render_bill(
        &self,
        request: &RenderRequest,
        document_id: &str,
        language: Language,
    ) -> Result<(), QrBillError> {
        println!("render {document_id} [{}]", language.code());
        println!("{request:#?}");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("qrbill=debug"))
        .init();

    let store = InMemoryDocumentStore::new()
        .with_bank_settings(BankSettings {
            company: "ACME AG".into(),
            bank_account: "ACME - PostFinance".into(),
        })
        .with_bank_account(BankAccount {
            name: "ACME - PostFinance".into(),
            iban: Some("CH44 3199 9123 0008 8901 2".into()),
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
            address_line1: Some("Marktgasse 5".into()),
            pincode: "3011".into(),
            city: "Bern".into(),
            country: "Switzerland".into(),
        })
        .with_country(CountryRecord {
            name: "Switzerland".into(),
            code: "CH".into(),
        });

    let mut invoice = SalesInvoice {
        name: "SINV-2024-00017".into(),
        docstatus: DocStatus::Draft,
        customer: "CUST-001".into(),
        customer_name: Some("Kunde GmbH".into()),
        company: "ACME AG".into(),
        company_address: "ACME-Billing".into(),
        customer_address: "CUST-001-Billing".into(),
        currency: "CHF".into(),
        outstanding_amount: dec!(420.00),
        language: "de-CH".into(),
        reference_number_full: None,
        esr_reference_code: None,
    };
    prepare_for_submit(&mut invoice);

    let workflow = BillWorkflow::new(store, StdoutRenderer);
    match workflow.generate(&invoice).await {
        Ok(BillOutcome::Rendered { request }) => {
            println!("reference: {:?}", request.reference);
        }
        Ok(BillOutcome::Skipped) => println!("invoice already finalized"),
        Err(e) => eprintln!("bill generation failed: {e}"),
    }
}
