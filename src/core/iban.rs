//! IBAN normalization and QR-IBAN classification.
//!
//! A QR-IBAN is recognised solely by its institution identifier (IID),
//! the five characters at offset 4 of the compact IBAN. The Swiss
//! QR-IID scheme reserves the range 30000–31999. IBAN check digits are
//! not verified here.

use serde::{Deserialize, Serialize};

use super::error::QrBillError;

/// Lowest institution identifier reserved for QR-IBANs.
pub const QR_IID_MIN: u32 = 30_000;
/// Highest institution identifier reserved for QR-IBANs.
pub const QR_IID_MAX: u32 = 31_999;

const IID_OFFSET: usize = 4;
const IID_LEN: usize = 5;

/// An IBAN in compact form (all whitespace removed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Strip whitespace and wrap. Fails on input that is empty once
    /// whitespace is gone.
    pub fn parse(input: &str) -> Result<Self, QrBillError> {
        let compact = strip_whitespace(input);
        if compact.is_empty() {
            return Err(QrBillError::missing("Bank Account", "iban"));
        }
        Ok(Self(compact))
    }

    /// Compact form, e.g. "CH4431999123000889012".
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Print form in blocks of four, e.g. "CH44 3199 9123 0008 8901 2".
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// The leading country code, if the IBAN is long enough to have one.
    pub fn country_code(&self) -> Option<&str> {
        self.0.get(..2)
    }

    /// Institution identifier, or `None` when the five characters at
    /// offset 4 are missing or not all ASCII digits.
    pub fn institution_id(&self) -> Option<u32> {
        let iid = self.0.get(IID_OFFSET..IID_OFFSET + IID_LEN)?;
        if !iid.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        iid.parse().ok()
    }
}

impl TryFrom<String> for Iban {
    type Error = QrBillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IbanClassification {
    /// True iff the IID lies in the QR-IID range.
    pub is_qr_iban: bool,
    /// Parsed institution identifier, if numeric.
    pub institution_id: Option<u32>,
}

/// Classify an IBAN as QR-IBAN or regular IBAN.
///
/// Fails closed: an IID that is absent or not purely numeric cannot lie
/// in the (numeric) QR-IID range, so such IBANs are regular IBANs.
pub fn classify(iban: &Iban) -> IbanClassification {
    let institution_id = iban.institution_id();
    IbanClassification {
        is_qr_iban: institution_id.is_some_and(|iid| (QR_IID_MIN..=QR_IID_MAX).contains(&iid)),
        institution_id,
    }
}

/// Convenience over [`Iban::parse`] + [`classify`] for raw strings.
/// Empty input is not a QR-IBAN.
pub fn is_qr_iban(iban: &str) -> bool {
    Iban::parse(iban).is_ok_and(|iban| classify(&iban).is_qr_iban)
}

/// Whitespace as bank portals and copy-paste deliver it: Unicode
/// `White_Space` minus NEL (U+0085), plus the zero-width no-break space
/// (U+FEFF).
pub(crate) fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|&c| !is_separator(c)).collect()
}
