use thiserror::Error;

/// Errors returned by identifier generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The entropy source failed; propagated unchanged, never retried and
    /// never downgraded to a weaker source.
    #[error("entropy source unavailable: {detail}")]
    Entropy { detail: String },
    #[error(transparent)]
    Id(#[from] lexid_core::Error),
}
