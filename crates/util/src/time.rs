//! Time and timestamp helpers.

use chrono::Local;

/// Default strftime-style format for [`time_string`].
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Returns the current Unix timestamp in seconds.
pub fn unix_time() -> i64 {
    Local::now().timestamp()
}

/// Renders the current local time with a strftime-style format.
///
/// # Examples
///
/// ```
/// use exec_util::time::{time_string, DEFAULT_TIME_FORMAT};
///
/// let s = time_string(DEFAULT_TIME_FORMAT);
/// assert_eq!(s.len(), "2024-01-01-00-00-00".len());
/// ```
pub fn time_string(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Returns the current Unix timestamp in seconds as decimal text.
pub fn timestamp() -> String {
    unix_time().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_time_is_current_era() {
        // 2020-01-01 as a sanity floor.
        assert!(unix_time() > 1_577_836_800);
    }

    #[test]
    fn test_timestamp_is_decimal() {
        let ts = timestamp();
        assert!(ts.parse::<i64>().is_ok());
    }

    #[test]
    fn test_time_string_default_format() {
        let s = time_string(DEFAULT_TIME_FORMAT);
        assert_eq!(s.len(), 19);
        assert_eq!(s.matches('-').count(), 5);
    }

    #[test]
    fn test_time_string_year_only() {
        let s = time_string("%Y");
        assert_eq!(s.len(), 4);
        assert!(s.parse::<u32>().unwrap() >= 2024);
    }
}
