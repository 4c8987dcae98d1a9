//! Payment reference resolution: QRR, SCOR and NON.
//!
//! # Logic
//!
//! 1. Whitespace is removed from the user reference.
//! 2. QR-IBAN: a 27-digit reference is taken as is. Anything else is
//!    replaced by a QRR reference derived from the fallback seed, and a
//!    [`ReferenceEvent::Synthesized`] is reported.
//! 3. Regular IBAN: an empty reference means NON. Otherwise the reference
//!    must be SCOR-shaped (`RF` + 2 digits + 1–21 alphanumerics, `RF`
//!    case-insensitive) or resolution fails.
//!
//! An invalid SCOR reference is never downgraded to NON.

use super::error::QrBillError;
use super::iban::{Iban, classify, strip_whitespace};
use super::observer::{ReferenceEvent, ReferenceObserver, TracingObserver};
use super::types::{ReferenceType, ResolvedReference};

/// Length of a QRR reference, check digit included.
pub const QRR_LEN: usize = 27;

/// Maximum payload length of an ISO 11649 creditor reference (after "RFnn").
pub const SCOR_MAX_PAYLOAD: usize = 21;

// Modulo-10 recursive carry table.
const MOD10_TABLE: [u8; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];

/// Whether checksums are verified on user-supplied references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Shape only. The check digits inside a QRR or SCOR reference are
    /// passed through unverified.
    #[default]
    Structural,
    /// Shape plus modulo-10 recursive (QRR) and modulo-97 (SCOR) checks.
    /// A QR-IBAN with a 27-digit reference that fails its check is
    /// rejected instead of falling back to synthesis.
    Verify,
}

/// Decides the reference regime for a bill and produces its reference.
///
/// ```
/// use qrbill::core::*;
///
/// let resolver = ReferenceResolver::new().checksums(ChecksumPolicy::Verify);
/// let r = resolver.resolve(false, "RF18 5390 0754 7034", "SINV-0001").unwrap();
/// assert_eq!(r.kind(), ReferenceType::CreditorReference);
/// assert_eq!(r.value(), "RF18539007547034");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceResolver<O = TracingObserver> {
    checksums: ChecksumPolicy,
    observer: O,
}

impl ReferenceResolver<TracingObserver> {
    /// Structural validation, events logged through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ReferenceObserver> ReferenceResolver<O> {
    /// Set the checksum policy (default: [`ChecksumPolicy::Structural`]).
    pub fn checksums(mut self, policy: ChecksumPolicy) -> Self {
        self.checksums = policy;
        self
    }

    /// Replace the event observer.
    pub fn observer<P: ReferenceObserver>(self, observer: P) -> ReferenceResolver<P> {
        ReferenceResolver {
            checksums: self.checksums,
            observer,
        }
    }

    /// Current checksum policy.
    pub fn checksum_policy(&self) -> ChecksumPolicy {
        self.checksums
    }

    /// Resolve the reference for a bill.
    ///
    /// `fallback_seed` is a stable per-bill identifier (typically the
    /// document name); it is only used when a QR-IBAN needs a
    /// synthesized reference.
    ///
    /// # Errors
    ///
    /// [`QrBillError::InvalidReferenceFormat`] when a regular IBAN gets a
    /// non-empty reference that is not SCOR-shaped, and
    /// [`QrBillError::InvalidChecksum`] under [`ChecksumPolicy::Verify`].
    pub fn resolve(
        &self,
        is_qr_iban: bool,
        raw_reference: &str,
        fallback_seed: &str,
    ) -> Result<ResolvedReference, QrBillError> {
        let clean = strip_whitespace(raw_reference);

        if is_qr_iban {
            if is_qrr_shaped(&clean) {
                if self.checksums == ChecksumPolicy::Verify && !is_valid_qrr(&clean) {
                    return Err(QrBillError::InvalidChecksum {
                        kind: ReferenceType::QrReference,
                        reference: clean,
                    });
                }
                return Ok(ResolvedReference::qrr(clean, false));
            }

            let reference = synthesize_qrr(fallback_seed);
            self.observer.observe(&ReferenceEvent::Synthesized {
                seed: fallback_seed,
                reference: &reference,
            });
            return Ok(ResolvedReference::qrr(reference, true));
        }

        if clean.is_empty() {
            return Ok(ResolvedReference::none());
        }

        if !is_scor_shaped(&clean) {
            return Err(QrBillError::InvalidReferenceFormat {
                input: raw_reference.to_string(),
            });
        }
        if self.checksums == ChecksumPolicy::Verify && !is_valid_creditor_reference(&clean) {
            return Err(QrBillError::InvalidChecksum {
                kind: ReferenceType::CreditorReference,
                reference: clean,
            });
        }
        Ok(ResolvedReference::scor(clean))
    }

    /// Classify `iban` and resolve in one step.
    pub fn resolve_for(
        &self,
        iban: &Iban,
        raw_reference: &str,
        fallback_seed: &str,
    ) -> Result<ResolvedReference, QrBillError> {
        self.resolve(classify(iban).is_qr_iban, raw_reference, fallback_seed)
    }
}

/// Resolve with the default resolver (structural checks, `tracing` events).
pub fn resolve_reference(
    is_qr_iban: bool,
    raw_reference: &str,
    fallback_seed: &str,
) -> Result<ResolvedReference, QrBillError> {
    ReferenceResolver::new().resolve(is_qr_iban, raw_reference, fallback_seed)
}

/// Derive a QRR reference from a per-bill seed.
///
/// Digits are kept, ASCII letters become their base-36 value (`A` = 10 …
/// `Z` = 35, case-insensitive), everything else is dropped. The last 26
/// digits are zero-padded on the left and the modulo-10 recursive check
/// digit is appended, so the result always passes [`is_valid_qrr`].
///
/// ```
/// assert_eq!(
///     qrbill::core::synthesize_qrr("SINV-0001"),
///     "000000000000002818233100015"
/// );
/// ```
pub fn synthesize_qrr(seed: &str) -> String {
    let digits: String = seed
        .chars()
        .filter_map(|c| c.to_digit(36))
        .map(|v| v.to_string())
        .collect();
    let tail = &digits[digits.len().saturating_sub(QRR_LEN - 1)..];
    let mut reference = format!("{tail:0>width$}", width = QRR_LEN - 1);
    // tail is ASCII digits only
    let check = qrr_check_digit(&reference).unwrap_or_default();
    reference.push(char::from(b'0' + check));
    reference
}

/// Modulo-10 recursive check digit over `digits`.
/// Returns `None` if `digits` contains anything but ASCII digits.
pub fn qrr_check_digit(digits: &str) -> Option<u8> {
    let mut carry = 0u8;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        carry = MOD10_TABLE[usize::from((carry + (b - b'0')) % 10)];
    }
    Some((10 - carry) % 10)
}

/// True for 27 ASCII digits whose last digit is the modulo-10 recursive
/// check digit of the first 26.
pub fn is_valid_qrr(reference: &str) -> bool {
    is_qrr_shaped(reference)
        && qrr_check_digit(&reference[..QRR_LEN - 1])
            == Some(reference.as_bytes()[QRR_LEN - 1] - b'0')
}

/// True for an ISO 11649 creditor reference with a correct modulo-97 check.
pub fn is_valid_creditor_reference(reference: &str) -> bool {
    is_scor_shaped(reference) && {
        let (head, payload) = reference.split_at(4);
        mod97(payload.chars().chain(head.chars())) == Some(1)
    }
}

/// Build an ISO 11649 creditor reference for `payload`.
///
/// Whitespace is removed and letters are upper-cased.
///
/// ```
/// assert_eq!(
///     qrbill::core::creditor_reference("5390 0754 7034").unwrap(),
///     "RF18539007547034"
/// );
/// ```
///
/// # Errors
///
/// [`QrBillError::InvalidReferenceFormat`] when the payload is empty,
/// longer than 21 characters, or not alphanumeric.
pub fn creditor_reference(payload: &str) -> Result<String, QrBillError> {
    let clean = strip_whitespace(payload).to_ascii_uppercase();
    if clean.is_empty()
        || clean.len() > SCOR_MAX_PAYLOAD
        || !clean.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        return Err(QrBillError::InvalidReferenceFormat {
            input: payload.to_string(),
        });
    }
    let remainder = mod97(clean.chars().chain("RF00".chars())).unwrap_or_default();
    Ok(format!("RF{:02}{clean}", 98 - remainder))
}

fn is_qrr_shaped(s: &str) -> bool {
    s.len() == QRR_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_scor_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    (5..=4 + SCOR_MAX_PAYLOAD).contains(&b.len())
        && b[..2].eq_ignore_ascii_case(b"RF")
        && b[2..4].iter().all(u8::is_ascii_digit)
        && b[4..].iter().all(u8::is_ascii_alphanumeric)
}

// ISO 7064 MOD 97-10 over an alphanumeric sequence, letters expanded to 10..35.
fn mod97(mut chars: impl Iterator<Item = char>) -> Option<u32> {
    chars.try_fold(0u32, |rem, c| {
        let v = c.to_digit(36)?;
        let shift = if v >= 10 { 100 } else { 10 };
        Some((rem * shift + v) % 97)
    })
}
