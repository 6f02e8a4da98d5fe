//! String utilities.
//!
//! Provides quoting, path normalization, and file extension matching.

mod ext;
mod paths;
mod quote;

pub use ext::{match_ext_name, match_ext_names};
pub use paths::unify_paths;
pub use quote::{double_quotes, single_quotes};
