//! Bill generation against host collaborators.
//!
//! Replaces the host's document lifecycle callbacks with an explicit
//! orchestration step: the host calls [`prepare_for_submit`] before
//! submitting an invoice and [`BillWorkflow::generate`] to produce the
//! bill. Records come from a [`DocumentStore`], the finished request
//! goes to a [`BillRenderer`].
//!
//! # Example
//!
//! ```ignore
//! use qrbill::workflow::*;
//!
//! let workflow = BillWorkflow::new(store, renderer);
//! match workflow.generate(&invoice).await? {
//!     BillOutcome::Rendered { request } => println!("{:?}", request.reference),
//!     BillOutcome::Skipped => {}
//! }
//! ```

mod generate;
mod memory;
mod ports;
mod records;

pub use generate::{BillOutcome, BillWorkflow, prepare_for_submit};
pub use memory::InMemoryDocumentStore;
pub use ports::{BillRenderer, DocumentStore, Notifier, TracingNotifier};
pub use records::*;
