use thiserror::Error;

/// Errors returned by identifier parsing and construction.
///
/// One enum with a variant per failure kind, so callers can branch on the
/// kind without a class hierarchy. Every failing path produces one of these;
/// there are no sentinel identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed textual input: wrong length, invalid character, or bad
    /// hyphen grouping.
    #[error("malformed identifier text: {detail}")]
    Format { detail: String },
    /// A numeric field is outside its valid domain.
    #[error("value out of range: {detail}")]
    Range { detail: String },
    /// The stored scope bytes decode to zero, which is reserved and never
    /// legitimately written.
    #[error("stored scope is the reserved value 0")]
    ReservedScope,
}
