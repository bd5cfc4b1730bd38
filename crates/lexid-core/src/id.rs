use crate::{base32, error::Error, layout, scope, uuid};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest encodable timestamp: 2^48 - 1 milliseconds since the Unix epoch
/// (roughly the year 10889).
pub const MAX_TIMESTAMP_MS: u64 = (1 << 48) - 1;

/// A 128-bit sortable identifier.
///
/// Internally this is the packed 16-byte big-endian layout, so comparing two
/// identifiers byte-wise agrees with comparing their Base32 or UUID strings.
/// Values are immutable once constructed; every constructor validates before
/// storing, so an existing `LexId` always has a non-zero stored scope.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LexId([u8; layout::LEN]);

impl LexId {
    /// Builds an identifier from its three fields.
    ///
    /// `scope` is in the public domain: 0 is an alias for the maximum scope
    /// and stores as 65535. Fails with a Range error if the timestamp does
    /// not fit in 48 bits.
    pub fn from_parts(
        timestamp_ms: u64,
        scope: u16,
        entropy: [u8; layout::ENTROPY_LEN],
    ) -> Result<Self, Error> {
        if timestamp_ms > MAX_TIMESTAMP_MS {
            return Err(Error::Range {
                detail: format!("timestamp {timestamp_ms} ms exceeds the 48-bit field"),
            });
        }
        let stored = scope::to_stored(scope);
        Ok(Self(layout::pack(timestamp_ms, stored, entropy)))
    }

    /// Builds an identifier from its packed 16-byte form.
    ///
    /// The 48-bit timestamp cannot be out of range here; the only thing to
    /// reject is the reserved stored scope 0.
    pub fn from_bytes(bytes: [u8; layout::LEN]) -> Result<Self, Error> {
        let (_, stored, _) = layout::unpack(&bytes);
        scope::to_public(stored)?;
        Ok(Self(bytes))
    }

    /// Parses the 26-character Crockford Base32 form.
    pub fn from_base32(text: &str) -> Result<Self, Error> {
        Self::from_bytes(base32::decode(text)?)
    }

    /// Parses the 36-character hyphenated hex (UUID) form.
    pub fn from_uuid(text: &str) -> Result<Self, Error> {
        Self::from_bytes(uuid::decode(text)?)
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> u64 {
        let (timestamp_ms, _, _) = layout::unpack(&self.0);
        timestamp_ms
    }

    /// The creation instant.
    ///
    /// The 48-bit field reaches past jiff's year-9999 ceiling, so this can
    /// fail for extreme timestamps; `timestamp_millis` is the lossless
    /// accessor.
    pub fn timestamp(&self) -> Result<Timestamp, Error> {
        let ms = self.timestamp_millis();
        Timestamp::from_millisecond(ms as i64).map_err(|_| Error::Range {
            detail: format!("timestamp {ms} ms is not a representable instant"),
        })
    }

    /// The scope tag, as stored. Construction guarantees this is never 0;
    /// an input of public 0 reads back as 65535.
    pub fn scope(&self) -> u16 {
        let (_, stored, _) = layout::unpack(&self.0);
        stored
    }

    /// A copy of the 8 entropy bytes.
    pub fn entropy(&self) -> [u8; layout::ENTROPY_LEN] {
        let (_, _, entropy) = layout::unpack(&self.0);
        entropy
    }

    /// The canonical Base32 form (uppercase, sorts like the bytes).
    pub fn to_base32(&self) -> String {
        base32::encode(&self.0)
    }

    /// The UUID-compatible hex form (lowercase).
    pub fn to_uuid(&self) -> String {
        uuid::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; layout::LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; layout::LEN] {
        self.0
    }
}

impl fmt::Display for LexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base32())
    }
}

impl fmt::Debug for LexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexId")
            .field("timestamp_ms", &self.timestamp_millis())
            .field("scope", &self.scope())
            .field("entropy", &self.entropy())
            .finish()
    }
}

impl FromStr for LexId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base32(s)
    }
}

impl Serialize for LexId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_base32())
    }
}

impl<'de> Deserialize<'de> for LexId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_base32(&text).map_err(serde::de::Error::custom)
    }
}
