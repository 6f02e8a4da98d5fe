/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Reverse lookup table mapping a byte to its 6-bit alphabet index.
/// Bytes outside the alphabet (padding included) map to -1.
pub(crate) static DECODE_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_64_unique_characters() {
        assert_eq!(ALPHABET.len(), 64);
        for (i, &a) in ALPHABET_BYTES.iter().enumerate() {
            for &b in &ALPHABET_BYTES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn decode_table_inverts_alphabet() {
        for (i, &c) in ALPHABET_BYTES.iter().enumerate() {
            assert_eq!(DECODE_TABLE[c as usize], i as i8);
        }
    }

    #[test]
    fn padding_is_not_in_alphabet() {
        assert_eq!(DECODE_TABLE[PAD as usize], -1);
        assert!(!ALPHABET.contains(PAD));
    }
}
