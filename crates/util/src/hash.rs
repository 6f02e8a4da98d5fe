//! Cryptographic digest helpers, available behind the `hash` feature.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Canonical lowercase name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Parses an algorithm from its canonical name.
    ///
    /// # Examples
    ///
    /// ```
    /// use exec_util::hash::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_name("sha256"), Some(Algorithm::Sha256));
    /// assert_eq!(Algorithm::from_name("crc32"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "md5" => Some(Algorithm::Md5),
            "sha1" => Some(Algorithm::Sha1),
            "sha256" => Some(Algorithm::Sha256),
            "sha512" => Some(Algorithm::Sha512),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the lowercase hex digest of `data` under `algorithm`.
///
/// # Examples
///
/// ```
/// use exec_util::hash::{hash_str, Algorithm};
///
/// assert_eq!(
///     hash_str("hello", Algorithm::Md5),
///     "5d41402abc4b2a76b9719d911017c592"
/// );
/// ```
pub fn hash_str(data: impl AsRef<[u8]>, algorithm: Algorithm) -> String {
    let data = data.as_ref();
    match algorithm {
        Algorithm::Md5 => hex::encode(Md5::digest(data)),
        Algorithm::Sha1 => hex::encode(Sha1::digest(data)),
        Algorithm::Sha256 => hex::encode(Sha256::digest(data)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(data)),
    }
}

/// Returns the lowercase hex digest of a file's contents.
///
/// # Errors
///
/// Propagates any I/O error from reading the file.
pub fn hash_file(path: impl AsRef<Path>, algorithm: Algorithm) -> io::Result<String> {
    let raw = fs::read(path)?;
    Ok(hash_str(raw, algorithm))
}
