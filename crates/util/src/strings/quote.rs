/// Wraps a string in single quotes.
///
/// # Examples
///
/// ```
/// use exec_util::strings::single_quotes;
///
/// assert_eq!(single_quotes("hello"), "'hello'");
/// ```
pub fn single_quotes(s: &str) -> String {
    format!("'{}'", s)
}

/// Wraps a string in double quotes.
///
/// # Examples
///
/// ```
/// use exec_util::strings::double_quotes;
///
/// assert_eq!(double_quotes("hello"), "\"hello\"");
/// ```
pub fn double_quotes(s: &str) -> String {
    format!("\"{}\"", s)
}
