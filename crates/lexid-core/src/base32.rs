//! Crockford Base32 codec over the packed 16-byte identifier.
//!
//! 128 bits do not divide evenly into 5-bit groups: the string is 26 groups
//! where the first carries only 3 meaningful bits. Decode rejects any string
//! whose first character maps to an alphabet value above 7, since encode can
//! never produce one.

use crate::error::Error;

/// Crockford's alphabet: digits plus uppercase letters, excluding the
/// confusable I, L, O and U.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of the encoded form of a 16-byte identifier.
pub const ENCODED_LEN: usize = 26;

/// Largest value the leading character may carry (128 = 25 * 5 + 3 bits).
const MAX_FIRST_VALUE: u8 = 7;

/// Maps an ASCII byte to its 5-bit value, folding case and the confusable
/// aliases `I`/`L` -> 1, `O` -> 0. `U` is accepted as an alias for value 22
/// on decode but never emitted by encode.
fn symbol_value(c: u8) -> Option<u8> {
    let c = c.to_ascii_uppercase();
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'O' => 0,
        b'I' | b'L' => 1,
        b'A'..=b'H' => c - b'A' + 10,
        b'J' | b'K' => c - b'J' + 18,
        b'M' | b'N' => c - b'M' + 20,
        b'P'..=b'T' => c - b'P' + 22,
        b'U' => 22,
        b'V' => 27,
        b'W'..=b'Z' => c - b'W' + 28,
        _ => return None,
    };
    Some(value)
}

/// Encodes 16 bytes as a 26-character Crockford Base32 string, most
/// significant group first so the string sorts like the bytes.
pub fn encode(bytes: &[u8; 16]) -> String {
    let value = u128::from_be_bytes(*bytes);
    let mut out = String::with_capacity(ENCODED_LEN);
    for group in (0..ENCODED_LEN).rev() {
        let index = ((value >> (5 * group)) & 0x1F) as usize;
        out.push(ALPHABET[index] as char);
    }
    out
}

/// Decodes a 26-character Base32 string back into 16 bytes.
///
/// Every character is validated before any bit assembly, so a bad suffix
/// fails the same way as a bad prefix.
pub fn decode(text: &str) -> Result<[u8; 16], Error> {
    let raw = text.as_bytes();
    if raw.len() != ENCODED_LEN {
        return Err(Error::Format {
            detail: format!("expected {ENCODED_LEN} characters, got {}", raw.len()),
        });
    }

    let mut values = [0u8; ENCODED_LEN];
    for (i, &c) in raw.iter().enumerate() {
        values[i] = symbol_value(c).ok_or_else(|| Error::Format {
            detail: format!("invalid character {:?} at position {i}", c as char),
        })?;
    }

    if values[0] > MAX_FIRST_VALUE {
        return Err(Error::Format {
            detail: format!("first character {:?} overflows 128 bits", raw[0] as char),
        });
    }

    let mut value = 0u128;
    for &v in &values {
        value = (value << 5) | u128::from(v);
    }
    Ok(value.to_be_bytes())
}
