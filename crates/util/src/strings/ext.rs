/// Checks whether a file name's extension matches a target extension.
///
/// The extension is the text after the last `.` in `name`. Returns false
/// when `name` or `target` is empty, or when `name` contains no dot. On
/// Windows the comparison ignores ASCII case; elsewhere it is exact.
///
/// # Examples
///
/// ```
/// use exec_util::strings::match_ext_name;
///
/// assert!(match_ext_name("photo.png", "png"));
/// assert!(!match_ext_name("photo.png", "jpg"));
/// assert!(!match_ext_name("Makefile", "png"));
/// ```
pub fn match_ext_name(name: &str, target: &str) -> bool {
    if name.is_empty() || target.is_empty() {
        return false;
    }

    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if cfg!(windows) {
                ext.eq_ignore_ascii_case(target)
            } else {
                ext == target
            }
        }
        None => false,
    }
}

/// Checks whether a file name's extension matches any of the targets.
///
/// # Examples
///
/// ```
/// use exec_util::strings::match_ext_names;
///
/// assert!(match_ext_names("photo.png", &["jpg", "png"]));
/// assert!(!match_ext_names("notes.txt", &["jpg", "png"]));
/// ```
pub fn match_ext_names<S: AsRef<str>>(name: &str, targets: &[S]) -> bool {
    targets.iter().any(|t| match_ext_name(name, t.as_ref()))
}
