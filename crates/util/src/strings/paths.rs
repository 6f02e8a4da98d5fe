/// Normalizes path separators by replacing every backslash with a slash.
///
/// # Examples
///
/// ```
/// use exec_util::strings::unify_paths;
///
/// assert_eq!(unify_paths("C:\\tools\\bin"), "C:/tools/bin");
/// assert_eq!(unify_paths("/usr/local/bin"), "/usr/local/bin");
/// ```
pub fn unify_paths(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_path() {
        assert_eq!(unify_paths("a\\b\\c"), "a/b/c");
    }

    #[test]
    fn test_unix_path_unchanged() {
        assert_eq!(unify_paths("a/b/c"), "a/b/c");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(unify_paths("a\\b/c\\d"), "a/b/c/d");
    }

    #[test]
    fn test_empty() {
        assert_eq!(unify_paths(""), "");
    }
}
