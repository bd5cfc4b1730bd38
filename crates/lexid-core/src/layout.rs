//! Byte placement for the packed identifier.
//!
//! ```text
//! offset  size  field
//! 0       6     timestamp, big-endian milliseconds since the Unix epoch
//! 6       2     scope, big-endian, stored domain (never 0)
//! 8       8     entropy, opaque
//! ```
//!
//! Pure mechanical transforms; range and reserved-value checks belong to the
//! callers. The timestamp handed to `pack` must already fit in 48 bits.

/// Packed identifier width in bytes.
pub const LEN: usize = 16;

/// Width of the entropy field in bytes.
pub const ENTROPY_LEN: usize = 8;

pub fn pack(timestamp_ms: u64, stored_scope: u16, entropy: [u8; ENTROPY_LEN]) -> [u8; LEN] {
    let mut out = [0u8; LEN];
    out[..6].copy_from_slice(&timestamp_ms.to_be_bytes()[2..]);
    out[6..8].copy_from_slice(&stored_scope.to_be_bytes());
    out[8..].copy_from_slice(&entropy);
    out
}

pub fn unpack(bytes: &[u8; LEN]) -> (u64, u16, [u8; ENTROPY_LEN]) {
    let timestamp_ms = u64::from_be_bytes([
        0, 0, bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5],
    ]);
    let stored_scope = u16::from_be_bytes([bytes[6], bytes[7]]);
    let mut entropy = [0u8; ENTROPY_LEN];
    entropy.copy_from_slice(&bytes[8..]);
    (timestamp_ms, stored_scope, entropy)
}
