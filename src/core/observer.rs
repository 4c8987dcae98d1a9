//! Observability hook for reference resolution.
//!
//! The resolver reports notable decisions as [`ReferenceEvent`]s to a
//! caller-supplied [`ReferenceObserver`]. The default observer forwards
//! them to `tracing`.

/// Something the resolver wants recorded for audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReferenceEvent<'a> {
    /// A QR-IBAN had no usable QRR reference, so one was derived from the seed.
    Synthesized {
        /// Stable per-bill identifier the reference was derived from.
        seed: &'a str,
        /// The derived 27-digit reference.
        reference: &'a str,
    },
}

impl ReferenceEvent<'_> {
    /// Stable event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Synthesized { .. } => "reference.synthesized",
        }
    }
}

/// Receives [`ReferenceEvent`]s.
pub trait ReferenceObserver: Send + Sync {
    fn observe(&self, event: &ReferenceEvent<'_>);
}

impl<O: ReferenceObserver + ?Sized> ReferenceObserver for &O {
    fn observe(&self, event: &ReferenceEvent<'_>) {
        (**self).observe(event)
    }
}

/// Emits every event as an `info` record on the `qrbill::reference` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ReferenceObserver for TracingObserver {
    fn observe(&self, event: &ReferenceEvent<'_>) {
        match event {
            ReferenceEvent::Synthesized { seed, reference } => {
                tracing::info!(
                    target: "qrbill::reference",
                    event = event.name(),
                    seed,
                    reference,
                    "QR-IBAN detected: synthesized QRR reference"
                );
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReferenceObserver for NoopObserver {
    fn observe(&self, _event: &ReferenceEvent<'_>) {}
}
