//! Tests for base64 encoding (to_base64).

use exec_base64::{to_base64, ALPHABET};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn matches_reference_encoder() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = to_base64(&blob);
        let expected = reference_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn output_is_padded_to_multiple_of_four() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base64(&blob);
        assert_eq!(encoded.len() % 4, 0);

        let pads = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        let expected_pads = match blob.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        assert_eq!(pads, expected_pads, "blob length {}", blob.len());
    }
}

#[test]
fn output_stays_within_alphabet() {
    for _ in 0..100 {
        let blob = generate_blob();
        for c in to_base64(&blob).chars() {
            assert!(c == '=' || ALPHABET.contains(c), "unexpected character {c}");
        }
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64(b""), "");
}

#[test]
fn known_vectors() {
    assert_eq!(to_base64(b"Man"), "TWFu");
    assert_eq!(to_base64(b"M"), "TQ==");
    assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
}

/// Simple chunked base64 encoding for test verification (no external dependency).
fn reference_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let chunk = &data[i..std::cmp::min(i + 3, data.len())];
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}
