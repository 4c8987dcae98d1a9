//! # qrbill
//!
//! Payment reference handling for Swiss QR-bills: decides whether a
//! creditor IBAN is a QR-IBAN, picks the reference regime (QRR, SCOR or
//! NON), validates or synthesizes the reference, and assembles the
//! request for an external QR-bill renderer.
//!
//! Amounts use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use qrbill::core::*;
//! use rust_decimal_macros::dec;
//!
//! let iban = Iban::parse("CH93 0076 2011 6238 5295 7").unwrap();
//! assert!(!classify(&iban).is_qr_iban);
//!
//! let reference = ReferenceResolver::new()
//!     .resolve_for(&iban, "RF18 5390 0754 7034", "SINV-0001")
//!     .unwrap();
//! assert_eq!(reference.kind(), ReferenceType::CreditorReference);
//!
//! let ctx = BillContextBuilder::new(Currency::Chf)
//!     .amount(dec!(199.95))
//!     .creditor(PartyBuilder::new("ACME AG", AddressBuilder::new("Bern", "3011", "CH").build()).build())
//!     .debtor(PartyBuilder::new("Kunde GmbH", AddressBuilder::new("Zürich", "8001", "CH").build()).build())
//!     .build()
//!     .unwrap();
//!
//! let request = assemble(&ctx, &iban, &reference);
//! assert_eq!(request.reference.as_deref(), Some("RF18539007547034"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | IBAN classification, reference resolution, payload assembly |
//! | `workflow` | Async bill generation against document store / renderer traits |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "workflow")]
pub mod workflow;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
