/// Path joining for entries under the current directory.
///
/// Works on plain strings because mount roots such as `ux0:/` are not
/// guaranteed to survive a round trip through `Path` on every host.

/// Longest path `build_path` will produce, in bytes.
pub const MAX_PATH_LEN: usize = 1023;

/// Separator inserted between the directory and the entry name.
const SEPARATOR: char = '/';

/// Join `current_path` and `entry_name` with exactly one separator.
///
/// No separator is inserted when `current_path` is empty or already ends
/// with one. Output longer than [`MAX_PATH_LEN`] is cut at the last
/// character boundary that fits; such paths are best-effort and may not
/// name an existing entry.
pub fn build_path(current_path: &str, entry_name: &str) -> String {
    let needs_separator = !current_path.is_empty()
        && !current_path.ends_with(|c: char| std::path::is_separator(c));

    let mut out = String::with_capacity(
        (current_path.len() + entry_name.len() + 1).min(MAX_PATH_LEN),
    );
    out.push_str(current_path);
    if needs_separator {
        out.push(SEPARATOR);
    }
    out.push_str(entry_name);

    if out.len() > MAX_PATH_LEN {
        let mut cut = MAX_PATH_LEN;
        while !out.is_char_boundary(cut) {
            cut -= 1;
        }
        out.truncate(cut);
    }
    out
}
