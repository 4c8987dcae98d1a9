use std::collections::HashMap;

use async_trait::async_trait;

use super::ports::DocumentStore;
use super::records::*;
use crate::core::QrBillError;

/// A [`DocumentStore`] backed by hash maps.
///
/// Records are inserted up front and only read afterwards, so no
/// locking is involved. Handy for tests and for hosts that fetch
/// everything before invoking the workflow.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    bank_settings: HashMap<String, BankSettings>,
    addresses: HashMap<String, AddressRecord>,
    countries: HashMap<String, CountryRecord>,
    bank_accounts: HashMap<String, BankAccount>,
}

impl InMemoryDocumentStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bank_settings(mut self, settings: BankSettings) -> Self {
        self.bank_settings.insert(settings.company.clone(), settings);
        self
    }

    pub fn with_address(mut self, address: AddressRecord) -> Self {
        self.addresses.insert(address.name.clone(), address);
        self
    }

    pub fn with_country(mut self, country: CountryRecord) -> Self {
        self.countries.insert(country.name.clone(), country);
        self
    }

    pub fn with_bank_account(mut self, account: BankAccount) -> Self {
        self.bank_accounts.insert(account.name.clone(), account);
        self
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, doctype: &str, name: &str) -> Result<T, QrBillError> {
    map.get(name)
        .cloned()
        .ok_or_else(|| QrBillError::not_found(doctype, name))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn bank_settings(&self, company: &str) -> Result<BankSettings, QrBillError> {
        lookup(&self.bank_settings, "Swiss QR Bill Settings", company)
    }

    async fn address(&self, name: &str) -> Result<AddressRecord, QrBillError> {
        lookup(&self.addresses, "Address", name)
    }

    async fn country(&self, name: &str) -> Result<CountryRecord, QrBillError> {
        lookup(&self.countries, "Country", name)
    }

    async fn bank_account(&self, name: &str) -> Result<BankAccount, QrBillError> {
        lookup(&self.bank_accounts, "Bank Account", name)
    }
}
