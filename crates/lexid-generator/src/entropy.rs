use crate::error::Error;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Width of the entropy request, matching the identifier's entropy field.
pub(crate) const ENTROPY_LEN: usize = lexid_core::layout::ENTROPY_LEN;

/// Supplies the random bytes embedded in each identifier.
///
/// Implementations must be cryptographically secure or fail loudly. The
/// generator never falls back to a weaker source on failure, since that
/// would silently weaken the uniqueness guarantee.
pub trait EntropySource: Send + Sync {
    /// Returns 8 fresh random bytes, or an error if the source is
    /// unavailable. Calls need no coordination with each other.
    fn entropy(&self) -> Result<[u8; ENTROPY_LEN], Error>;
}

/// The operating system's CSPRNG.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn entropy(&self) -> Result<[u8; ENTROPY_LEN], Error> {
        let mut bytes = [0u8; ENTROPY_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| Error::Entropy {
                detail: err.to_string(),
            })?;
        Ok(bytes)
    }
}
