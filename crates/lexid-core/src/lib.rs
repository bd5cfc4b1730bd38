//! Core codec and value type for lexid identifiers.
//!
//! A lexid is a 128-bit sortable identifier: a 48-bit millisecond timestamp,
//! a 16-bit scope tag, and 64 bits of random entropy, stored big-endian so
//! that byte order and both textual encodings (Crockford Base32 and
//! UUID-style hex) sort identically.

pub mod base32;
pub mod error;
pub mod id;
pub mod layout;
pub mod scope;
pub mod uuid;

pub use error::Error;
pub use id::{LexId, MAX_TIMESTAMP_MS};
