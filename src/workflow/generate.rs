use crate::core::*;

use super::ports::{BillRenderer, DocumentStore, Notifier, TracingNotifier};
use super::records::*;

/// What [`BillWorkflow::generate`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillOutcome {
    /// The invoice is finalized; nothing was fetched or rendered.
    Skipped,
    /// The bill was handed to the renderer.
    Rendered {
        /// The request that was rendered.
        request: RenderRequest,
    },
}

/// Generates the QR-bill for a sales invoice.
///
/// Sequence: fetch records → check currency → classify IBAN → resolve
/// reference → assemble → render. The first failure ends the attempt;
/// it is shown through the [`Notifier`] and returned. Nothing is retried.
pub struct BillWorkflow<S, R, N = TracingNotifier, O = TracingObserver> {
    store: S,
    renderer: R,
    notifier: N,
    resolver: ReferenceResolver<O>,
}

impl<S: DocumentStore, R: BillRenderer> BillWorkflow<S, R> {
    /// Workflow with `tracing` notifications and the default resolver.
    pub fn new(store: S, renderer: R) -> Self {
        Self {
            store,
            renderer,
            notifier: TracingNotifier,
            resolver: ReferenceResolver::new(),
        }
    }
}

impl<S, R, N, O> BillWorkflow<S, R, N, O>
where
    S: DocumentStore,
    R: BillRenderer,
    N: Notifier,
    O: ReferenceObserver,
{
    /// Replace the notifier.
    pub fn notifier<M: Notifier>(self, notifier: M) -> BillWorkflow<S, R, M, O> {
        BillWorkflow {
            store: self.store,
            renderer: self.renderer,
            notifier,
            resolver: self.resolver,
        }
    }

    /// Replace the reference resolver (checksum policy, observer).
    pub fn resolver<P: ReferenceObserver>(
        self,
        resolver: ReferenceResolver<P>,
    ) -> BillWorkflow<S, R, N, P> {
        BillWorkflow {
            store: self.store,
            renderer: self.renderer,
            notifier: self.notifier,
            resolver,
        }
    }

    /// Generate and render the bill for `invoice`.
    ///
    /// # Errors
    ///
    /// [`QrBillError::UnsupportedCurrency`], [`QrBillError::InvalidReferenceFormat`],
    /// [`QrBillError::InvalidChecksum`], [`QrBillError::DocumentNotFound`],
    /// [`QrBillError::MissingField`] or [`QrBillError::Render`].
    #[tracing::instrument(skip_all, fields(document = %invoice.name))]
    pub async fn generate(&self, invoice: &SalesInvoice) -> Result<BillOutcome, QrBillError> {
        if invoice.docstatus.is_finalized() {
            tracing::debug!(status = invoice.docstatus.code(), "invoice finalized, skipping");
            return Ok(BillOutcome::Skipped);
        }

        match self.run(invoice).await {
            Ok(request) => Ok(BillOutcome::Rendered { request }),
            Err(err) => {
                self.notifier.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    async fn run(&self, invoice: &SalesInvoice) -> Result<RenderRequest, QrBillError> {
        self.notifier.show_progress(10, "getting data...");

        let language = Language::from_locale(&invoice.language);
        let settings = self.store.bank_settings(&invoice.company).await?;
        let currency = Currency::from_code(&invoice.currency)
            .ok_or_else(|| QrBillError::UnsupportedCurrency(invoice.currency.clone()))?;

        let company_address = self.store.address(&invoice.company_address).await?;
        let customer_address = self.store.address(&invoice.customer_address).await?;
        let account = self.store.bank_account(&settings.bank_account).await?;
        let iban = Iban::parse(account.iban.as_deref().unwrap_or_default())?;

        let classification = classify(&iban);
        tracing::debug!(
            iban = %iban,
            institution_id = ?classification.institution_id,
            qr_iban = classification.is_qr_iban,
            "classified creditor account"
        );

        let raw_reference = invoice.reference_number_full.as_deref().unwrap_or_default();
        let reference = self
            .resolver
            .resolve(classification.is_qr_iban, raw_reference, &invoice.name)?;

        self.notifier.show_progress(40, "generating pdf...");

        let company_country = self.store.country(&company_address.country).await?;
        let customer_country = self.store.country(&customer_address.country).await?;

        let ctx = BillContext {
            currency,
            amount: Some(invoice.outstanding_amount),
            creditor: party(&invoice.company, &company_address, &company_country),
            debtor: party(invoice.debtor_name(), &customer_address, &customer_country),
            message: None,
        };
        let request = assemble(&ctx, &iban, &reference);

        self.renderer
            .render_bill(&request, &invoice.name, language)
            .await?;
        tracing::debug!(reference_type = %reference.kind(), "bill rendered");
        Ok(request)
    }
}

fn party(name: &str, address: &AddressRecord, country: &CountryRecord) -> Party {
    Party {
        name: name.to_string(),
        address: Address {
            street: address.address_line1.clone(),
            building_number: None,
            postal_code: address.pincode.clone(),
            city: address.city.clone(),
            country_code: normalize_country_code(&country.code),
        },
    }
}

/// Copy the user reference into `esr_reference_code` for bank
/// reconciliation, ahead of submission.
///
/// Finalized invoices and empty references are left alone. Returns
/// whether the invoice was changed.
pub fn prepare_for_submit(invoice: &mut SalesInvoice) -> bool {
    if invoice.docstatus.is_finalized() {
        return false;
    }
    match invoice.reference_number_full.as_deref() {
        Some(reference) if !reference.is_empty() => {
            invoice.esr_reference_code = Some(reference.to_string());
            true
        }
        _ => false,
    }
}
