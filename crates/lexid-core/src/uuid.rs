//! UUID-style hex codec over the packed 16-byte identifier.
//!
//! This is a plain reinterpretation of the same 16 bytes the Base32 codec
//! works on, grouped 8-4-4-4-12. No field semantics live here.

use crate::error::Error;

/// Length of the hyphenated form: 32 hex digits plus 4 hyphens.
pub const ENCODED_LEN: usize = 36;

/// Byte offsets at which a hyphen must appear.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Encodes 16 bytes as lowercase `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
pub fn encode(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(ENCODED_LEN);
    for (i, b) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push(HEX[usize::from(b >> 4)] as char);
        out.push(HEX[usize::from(b & 0x0F)] as char);
    }
    out
}

/// Decodes a 36-character hyphenated hex string, case-insensitively.
pub fn decode(text: &str) -> Result<[u8; 16], Error> {
    let raw = text.as_bytes();
    if raw.len() != ENCODED_LEN {
        return Err(Error::Format {
            detail: format!("expected {ENCODED_LEN} characters, got {}", raw.len()),
        });
    }

    let mut digits = [0u8; 32];
    let mut n = 0;
    for (i, &c) in raw.iter().enumerate() {
        if HYPHENS.contains(&i) {
            if c != b'-' {
                return Err(Error::Format {
                    detail: format!("expected '-' at position {i}, got {:?}", c as char),
                });
            }
            continue;
        }
        let digit = (c as char).to_digit(16).ok_or_else(|| Error::Format {
            detail: format!("invalid hex digit {:?} at position {i}", c as char),
        })?;
        digits[n] = digit as u8;
        n += 1;
    }

    let mut out = [0u8; 16];
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        out[i] = pair[0] << 4 | pair[1];
    }
    Ok(out)
}
