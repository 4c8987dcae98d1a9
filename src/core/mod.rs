//! Core QR-bill types: IBAN classification, reference resolution and
//! payload assembly.
//!
//! Everything here is pure and synchronous. The only side effect is the
//! [`ReferenceEvent`] reported when a QRR reference is synthesized.

mod assemble;
mod builder;
pub mod countries;
mod error;
mod iban;
mod observer;
mod reference;
mod types;
mod validation;

pub use assemble::*;
pub use builder::*;
pub use countries::{is_known_country_code, normalize_country_code};
pub use error::*;
pub use iban::{Iban, IbanClassification, QR_IID_MAX, QR_IID_MIN, classify, is_qr_iban};
pub use observer::*;
pub use reference::*;
pub use types::*;
pub use validation::*;
