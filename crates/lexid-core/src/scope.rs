//! Mapping between the public scope domain and the stored scope domain.
//!
//! The stored field must never be 0 so that every identifier has a non-zero,
//! orderable scope. Callers express "unscoped / maximum" as public 0, which
//! stores as 65535. The mapping is one-way: reading back always yields the
//! stored value, so stored 65535 stays 65535 on every read path.

use crate::error::Error;

/// Largest stored scope; also what the public alias 0 maps to.
pub const MAX: u16 = u16::MAX;

/// Maps a public-domain scope to its stored form.
pub fn to_stored(public: u16) -> u16 {
    if public == 0 {
        MAX
    } else {
        public
    }
}

/// Maps a stored scope back to the public domain. Stored 0 is reserved and
/// indicates corrupt or forged input.
pub fn to_public(stored: u16) -> Result<u16, Error> {
    if stored == 0 {
        Err(Error::ReservedScope)
    } else {
        Ok(stored)
    }
}
