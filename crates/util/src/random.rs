//! Random value generation.
//!
//! Each generator seeds from the thread-local RNG per call; there is no
//! shared generator state between calls.

use rand::Rng;
use uuid::Uuid;

/// Default character set for [`random_string`].
pub const ALNUM_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random version-4 UUID in lowercase hyphenated form.
///
/// # Examples
///
/// ```
/// use exec_util::random::generate_uuid;
///
/// let id = generate_uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.matches('-').count(), 4);
/// ```
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a random string of `length` characters drawn uniformly from
/// `charset`. An empty charset yields an empty string.
///
/// # Examples
///
/// ```
/// use exec_util::random::{random_string, ALNUM_CHARSET};
///
/// let s = random_string(16, ALNUM_CHARSET);
/// assert_eq!(s.chars().count(), 16);
/// ```
pub fn random_string(length: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Generates a random decimal number whose digit count is drawn uniformly
/// from `min_digits..=max_digits`. Digits are drawn independently, so
/// leading zeros are possible and the result can be 0.
///
/// # Panics
///
/// Panics if `min_digits > max_digits` or `max_digits` exceeds 19 (the
/// largest digit count a `u64` can always hold).
///
/// # Examples
///
/// ```
/// use exec_util::random::random_digits;
///
/// let n = random_digits(1, 9);
/// assert!(n < 1_000_000_000);
/// ```
pub fn random_digits(min_digits: u32, max_digits: u32) -> u64 {
    assert!(min_digits <= max_digits);
    assert!(max_digits <= 19);

    let mut rng = rand::thread_rng();
    let count = rng.gen_range(min_digits..=max_digits);

    let mut value: u64 = 0;
    for _ in 0..count {
        value = value * 10 + rng.gen_range(0..10u64);
    }
    value
}
