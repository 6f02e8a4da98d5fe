//! Strict base64 decoding function.

use crate::constants::DECODE_TABLE;
use crate::Base64Error;

const PADDING_BYTE: u8 = b'=';

/// Decodes a base64 string, rejecting malformed input.
///
/// Unlike [`from_base64`](crate::from_base64), which truncates at the
/// first invalid character, this entry point requires well-formed input:
/// a length that is a multiple of four, alphabet characters only, and
/// zero to two trailing `=` padding characters.
///
/// # Arguments
///
/// * `encoded` - The base64 text to decode.
///
/// # Returns
///
/// The decoded bytes, or an error describing why the input is invalid.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] when the input length is not a
/// multiple of four, and [`Base64Error::InvalidBase64String`] when a
/// non-alphabet character appears anywhere before the trailing padding.
///
/// # Example
///
/// ```
/// use exec_base64::{from_base64_strict, Base64Error};
///
/// assert_eq!(from_base64_strict("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(
///     from_base64_strict("aGVsbG8=garbage"),
///     Err(Base64Error::InvalidLength)
/// );
/// ```
pub fn from_base64_strict(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let mut padding = 0;
    if bytes[length - 1] == PADDING_BYTE {
        padding += 1;
        if bytes[length - 2] == PADDING_BYTE {
            padding += 1;
        }
    }
    let data = &bytes[..length - padding];

    let mut out = Vec::with_capacity(length / 4 * 3);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        let sextet = DECODE_TABLE[byte as usize];
        if sextet < 0 {
            return Err(Base64Error::InvalidBase64String);
        }
        acc = (acc << 6) | sextet as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xFF) as u8);
        }
    }

    Ok(out)
}
