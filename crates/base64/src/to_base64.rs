//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Encodes a byte slice to a standard base64 string.
///
/// Input bytes are shifted into a bit accumulator eight bits at a time;
/// every full 6-bit group emits one alphabet character. A partial
/// trailing group is zero-filled up to six bits, and the output is
/// padded with `=` to a multiple of four characters.
///
/// # Arguments
///
/// * `data` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with standard padding. The output length for
/// `n` input bytes is always `ceil(n / 3) * 4`.
///
/// # Example
///
/// ```
/// use exec_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 4 / 3) + 4);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= 6 {
            bits -= 6;
            out.push(ALPHABET_BYTES[((acc >> bits) & 0x3F) as usize] as char);
        }
    }

    if bits > 0 {
        out.push(ALPHABET_BYTES[((acc << (6 - bits)) & 0x3F) as usize] as char);
    }

    while out.len() % 4 != 0 {
        out.push(PAD);
    }

    out
}
