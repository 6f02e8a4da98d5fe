//! Base64 encoding and decoding utilities.
//!
//! This crate provides standard (RFC 4648) base64 with `=` padding:
//! - An encoder that is total over all byte sequences.
//! - A permissive decoder that truncates at the first non-alphabet
//!   character instead of failing.
//! - A strict decoder that reports malformed input as an error.
//!
//! # Example
//!
//! ```
//! use exec_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded);
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod from_base64;
mod from_base64_strict;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use from_base64_strict::from_base64_strict;
pub use to_base64::to_base64;

/// Error type for the strict decoding path.
///
/// The permissive [`from_base64`] never produces these; it degrades by
/// truncating its output instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains invalid base64 characters.
    InvalidBase64String,
    /// The base64 string length must be a multiple of 4.
    InvalidLength,
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidBase64String => write!(f, "INVALID_BASE64_STRING"),
            Base64Error::InvalidLength => write!(f, "Base64 string length must be a multiple of 4"),
        }
    }
}

impl std::error::Error for Base64Error {}
