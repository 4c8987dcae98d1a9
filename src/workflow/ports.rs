//! Collaborator interfaces the bill workflow depends on.

use async_trait::async_trait;

use super::records::*;
use crate::core::{Language, QrBillError, RenderRequest};

/// Read access to the host data store.
///
/// A record that does not exist is reported as
/// [`QrBillError::DocumentNotFound`].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// QR-bill settings of `company`.
    async fn bank_settings(&self, company: &str) -> Result<BankSettings, QrBillError>;

    async fn address(&self, name: &str) -> Result<AddressRecord, QrBillError>;

    async fn country(&self, name: &str) -> Result<CountryRecord, QrBillError>;

    async fn bank_account(&self, name: &str) -> Result<BankAccount, QrBillError>;
}

/// External PDF / QR generation.
#[async_trait]
pub trait BillRenderer: Send + Sync {
    /// Render the bill for `document_id`. Failures are reported as
    /// [`QrBillError::Render`].
    async fn render_bill(
        &self,
        request: &RenderRequest,
        document_id: &str,
        language: Language,
    ) -> Result<(), QrBillError>;
}

/// User-facing notifications. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);

    fn show_progress(&self, percent: u8, message: &str);
}

#[async_trait]
impl<'a, T: DocumentStore + ?Sized> DocumentStore for &'a T {
    async fn bank_settings(&self, company: &str) -> Result<BankSettings, QrBillError> {
        (**self).bank_settings(company).await
    }

    async fn address(&self, name: &str) -> Result<AddressRecord, QrBillError> {
        (**self).address(name).await
    }

    async fn country(&self, name: &str) -> Result<CountryRecord, QrBillError> {
        (**self).country(name).await
    }

    async fn bank_account(&self, name: &str) -> Result<BankAccount, QrBillError> {
        (**self).bank_account(name).await
    }
}

#[async_trait]
impl<'a, T: BillRenderer + ?Sized> BillRenderer for &'a T {
    async fn render_bill(
        &self,
        request: &RenderRequest,
        document_id: &str,
        language: Language,
    ) -> Result<(), QrBillError> {
        (**self).render_bill(request, document_id, language).await
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn show_progress(&self, percent: u8, message: &str) {
        (**self).show_progress(percent, message)
    }
}

/// Sends notifications to `tracing` instead of a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show_error(&self, message: &str) {
        tracing::warn!(target: "qrbill::workflow", "{message}");
    }

    fn show_progress(&self, percent: u8, message: &str) {
        tracing::debug!(target: "qrbill::workflow", percent, "{message}");
    }
}
