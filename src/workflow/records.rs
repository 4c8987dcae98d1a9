//! Typed host records consumed by the bill workflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::QrBillError;

/// Lifecycle state of a host document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DocStatus {
    /// 0: editable.
    #[default]
    Draft,
    /// 1: finalized.
    Submitted,
    /// 2: finalized and voided.
    Cancelled,
}

impl DocStatus {
    pub fn code(&self) -> u8 {
        match self {
            Self::Draft => 0,
            Self::Submitted => 1,
            Self::Cancelled => 2,
        }
    }

    /// Parse from the host's numeric status.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Draft),
            1 => Some(Self::Submitted),
            2 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// A finalized document never gets a new bill.
    pub fn is_finalized(&self) -> bool {
        !matches!(self, Self::Draft)
    }
}

impl TryFrom<u8> for DocStatus {
    type Error = QrBillError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| QrBillError::Validation(format!("unknown docstatus {code}")))
    }
}

impl From<DocStatus> for u8 {
    fn from(status: DocStatus) -> Self {
        status.code()
    }
}

/// The sales invoice a QR-bill is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesInvoice {
    /// Unique document name, e.g. "SINV-0001". Seeds QRR synthesis.
    pub name: String,
    pub docstatus: DocStatus,
    /// Customer identifier.
    pub customer: String,
    /// Display name, preferred over `customer` when set.
    pub customer_name: Option<String>,
    pub company: String,
    /// Name of the company's Address record.
    pub company_address: String,
    /// Name of the customer's Address record.
    pub customer_address: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub outstanding_amount: Decimal,
    /// Host locale label, e.g. "de" or "fr-CH".
    pub language: String,
    /// Reference as typed by the user (QRR or SCOR), possibly spaced.
    pub reference_number_full: Option<String>,
    /// Reference kept for bank reconciliation.
    pub esr_reference_code: Option<String>,
}

impl SalesInvoice {
    /// Debtor name printed on the bill.
    pub fn debtor_name(&self) -> &str {
        self.customer_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.customer)
    }
}

/// Per-company QR-bill settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSettings {
    pub company: String,
    /// Name of the Bank Account record holding the creditor IBAN.
    pub bank_account: String,
}

/// Postal address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub name: String,
    pub address_line1: Option<String>,
    pub pincode: String,
    pub city: String,
    /// Name of the Country record.
    pub country: String,
}

/// Country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    /// ISO 3166-1 alpha-2 code, any case.
    pub code: String,
}

/// Bank account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub name: String,
    pub iban: Option<String>,
}
