/// Case-insensitive extension matching.
///
/// Only the suffix after the last `.` of a file name is compared, so
/// `archive.tar.gz` has the extension `gz`.

/// Return `true` if `file_name`'s extension equals `extension`.
///
/// The pattern may be written with or without its leading dot (`"mp3"` and
/// `".mp3"` are equivalent). A name without a dot, an empty extension, or an
/// empty pattern never matches.
pub fn matches(file_name: &str, extension: &str) -> bool {
    let pattern = extension.strip_prefix('.').unwrap_or(extension);
    if pattern.is_empty() {
        return false;
    }

    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            !ext.is_empty() && ext.eq_ignore_ascii_case(pattern)
        }
        None => false,
    }
}

/// Return `true` if any pattern in `extensions` matches.
///
/// An empty set matches nothing here; callers that want "empty means
/// everything" must check for that themselves.
pub fn matches_any(file_name: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| matches(file_name, ext))
}
