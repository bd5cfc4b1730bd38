//! Identifier generation for lexid.
//!
//! The codec in `lexid-core` is pure; this crate supplies the two external
//! collaborators it needs — a clock and a source of secure random bytes —
//! behind traits so callers pick the implementation once, explicitly.

mod clock;
mod entropy;
pub mod error;
mod generator;

pub use clock::{Clock, SystemClock};
pub use entropy::{EntropySource, OsEntropy};
pub use error::Error;
pub use generator::{Generator, GeneratorSettings};
