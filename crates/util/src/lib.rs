//! exec-util - General-purpose helpers for exec-utils
//!
//! This crate collects the small, independent utilities that surround the
//! base64 codec: string helpers (quoting, path normalization, extension
//! matching), time formatting, random value generation, regex-based
//! validators, and optional cryptographic digests behind the `hash`
//! feature.
//!
//! Every function is a pure one-shot transformation with no shared state.

#[cfg(feature = "hash")]
pub mod hash;
pub mod random;
pub mod strings;
pub mod time;
pub mod validate;

// Re-exports for convenience
#[cfg(feature = "hash")]
pub use hash::{hash_file, hash_str, Algorithm};
pub use random::{generate_uuid, random_digits, random_string, ALNUM_CHARSET};
pub use strings::{double_quotes, match_ext_name, match_ext_names, single_quotes, unify_paths};
pub use time::{time_string, timestamp, unix_time, DEFAULT_TIME_FORMAT};
pub use validate::{is_proxy_address, is_url, match_sizes, match_sizes_v};
