//! Permissive base64 decoding function.

use crate::constants::DECODE_TABLE;

/// Decodes a base64 string, stopping at the first non-alphabet character.
///
/// Each alphabet character contributes six bits to an accumulator; every
/// full eight bits emit one output byte. The first byte outside the
/// 64-character alphabet ends decoding and everything after it is
/// ignored. Padding `=` is not part of the alphabet, so it terminates
/// decoding like any other unrecognized character. Leftover bits (fewer
/// than eight) are discarded.
///
/// Malformed input therefore yields a truncated result rather than an
/// error; use [`from_base64_strict`](crate::from_base64_strict) to
/// reject malformed input instead.
///
/// # Arguments
///
/// * `encoded` - The base64 text to decode, not required to be well-formed.
///
/// # Returns
///
/// The decoded bytes, up to the first invalid character.
///
/// # Example
///
/// ```
/// use exec_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8="), b"hello");
/// // Trailing garbage after the padding is ignored.
/// assert_eq!(from_base64("aGVsbG8=garbage"), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len() * 3 / 4);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in encoded.as_bytes() {
        let sextet = DECODE_TABLE[byte as usize];
        if sextet < 0 {
            break;
        }
        acc = (acc << 6) | sextet as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xFF) as u8);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(from_base64(""), b"");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(from_base64("TWFu"), b"Man");
        assert_eq!(from_base64("TQ=="), b"M");
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(from_base64("Zg=="), b"f");
        assert_eq!(from_base64("Zm8="), b"fo");
        assert_eq!(from_base64("Zm9v"), b"foo");
        assert_eq!(from_base64("Zm9vYmFy"), b"foobar");
    }

    #[test]
    fn test_stops_at_padding() {
        assert_eq!(from_base64("SGVsbG8="), b"Hello");
        assert_eq!(from_base64("SGVsbG8=garbage"), b"Hello");
    }

    #[test]
    fn test_stops_at_interior_garbage() {
        assert_eq!(from_base64("TWFu!TWFu"), b"Man");
        assert_eq!(from_base64("QQ==extra!"), b"A");
    }

    #[test]
    fn test_unpadded_input() {
        // Missing padding is fine; leftover bits are dropped.
        assert_eq!(from_base64("Zm8"), b"fo");
        assert_eq!(from_base64("Zg"), b"f");
    }

    #[test]
    fn test_all_garbage() {
        assert_eq!(from_base64("!!!!"), b"");
        assert_eq!(from_base64("===="), b"");
    }
}
