use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference regime of a QR-bill (payload element `Tp`).
///
/// Exactly one applies per bill. Which one is decided by the creditor
/// IBAN kind and the shape of the user reference, see
/// [`ReferenceResolver`](super::ReferenceResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    /// QRR: 27-digit QR reference, mandatory with a QR-IBAN.
    #[serde(rename = "QRR")]
    QrReference,
    /// SCOR: ISO 11649 creditor reference ("RF" + 2 check digits + payload).
    #[serde(rename = "SCOR")]
    CreditorReference,
    /// NON: no structured reference.
    #[serde(rename = "NON")]
    NoReference,
}

impl ReferenceType {
    /// Payload code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::QrReference => "QRR",
            Self::CreditorReference => "SCOR",
            Self::NoReference => "NON",
        }
    }

    /// Parse from payload code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "QRR" => Some(Self::QrReference),
            "SCOR" => Some(Self::CreditorReference),
            "NON" => Some(Self::NoReference),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A reference that satisfies the shape of its regime.
///
/// Only the resolver constructs these: a QRR value is always 27 ASCII
/// digits, a SCOR value always matches `RF\d{2}[A-Za-z0-9]{1,21}`, and
/// a NON value is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedReference {
    kind: ReferenceType,
    value: String,
    synthesized: bool,
}

impl ResolvedReference {
    pub(crate) fn qrr(value: String, synthesized: bool) -> Self {
        Self {
            kind: ReferenceType::QrReference,
            value,
            synthesized,
        }
    }

    pub(crate) fn scor(value: String) -> Self {
        Self {
            kind: ReferenceType::CreditorReference,
            value,
            synthesized: false,
        }
    }

    pub(crate) fn none() -> Self {
        Self {
            kind: ReferenceType::NoReference,
            value: String::new(),
            synthesized: false,
        }
    }

    /// The regime.
    pub fn kind(&self) -> ReferenceType {
        self.kind
    }

    /// The reference to transmit (empty for NON).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the reference was derived from the fallback seed
    /// instead of taken from user input.
    pub fn is_synthesized(&self) -> bool {
        self.synthesized
    }

    /// The reference as an option, `None` for NON.
    pub fn as_option(&self) -> Option<&str> {
        match self.kind {
            ReferenceType::NoReference => None,
            _ => Some(&self.value),
        }
    }
}

/// Currencies admitted on a Swiss QR-bill (payload element `Ccy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Swiss franc.
    #[serde(rename = "CHF")]
    Chf,
    /// Euro.
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
        }
    }

    /// Parse an ISO 4217 code. Case and surrounding whitespace are ignored.
    /// Returns `None` for every currency a QR-bill does not admit.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "CHF" => Some(Self::Chf),
            "EUR" => Some(Self::Eur),
            _ => None,
        }
    }
}

/// Language the payment part is printed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "DE")]
    German,
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "IT")]
    Italian,
    #[serde(rename = "FR")]
    French,
}

impl Language {
    /// Rendering language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "DE",
            Self::English => "EN",
            Self::Italian => "IT",
            Self::French => "FR",
        }
    }

    /// Map a host locale label ("de", "fr-CH", "en_US", "Italian" ...) to
    /// a rendering language. Unknown or empty labels fall back to German.
    pub fn from_locale(label: &str) -> Self {
        let label = label.trim().to_ascii_lowercase();
        let primary = label
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match primary {
            "en" | "english" => Self::English,
            "it" | "italian" | "italiano" => Self::Italian,
            "fr" | "french" | "français" | "francais" => Self::French,
            _ => Self::German,
        }
    }
}

/// Postal address of a creditor or debtor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name (or first address line).
    pub street: Option<String>,
    /// Building number, when kept apart from the street.
    pub building_number: Option<String>,
    /// Postal code.
    pub postal_code: String,
    /// Town.
    pub city: String,
    /// Country code (ISO 3166-1 alpha-2, upper case).
    pub country_code: String,
}

/// Creditor or debtor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Name or company.
    pub name: String,
    /// Postal address.
    pub address: Address,
}

/// Everything the payload assembler needs besides the reference.
/// Owned by the caller and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillContext {
    /// Bill currency.
    pub currency: Currency,
    /// Amount to pay. `None` leaves the amount field blank on the slip.
    pub amount: Option<Decimal>,
    /// Payee.
    pub creditor: Party,
    /// Payer.
    pub debtor: Party,
    /// Free-text message printed under "Additional information".
    pub message: Option<String>,
}
