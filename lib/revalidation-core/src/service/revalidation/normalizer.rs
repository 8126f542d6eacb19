use itertools::Itertools;
use url::Url;

/// Normalizes every value, drops the empty ones, removes duplicates keeping
/// the first occurrence and keeps at most `max_entries` values.
pub(super) fn normalize_values(
    values: &[String],
    max_entries: usize,
    normalize: impl Fn(&str) -> Option<String>,
) -> Vec<String> {
    values
        .iter()
        .map(String::as_str)
        .filter_map(normalize)
        .unique()
        .take(max_entries)
        .collect()
}

pub(super) fn normalize_tag(tag: &str, max_length: usize) -> Option<String> {
    non_empty(truncate_chars(tag.trim(), max_length))
}

/// Site-relative paths only, anything pointing at another origin is discarded.
pub(super) fn normalize_path(path: &str, max_length: usize) -> Option<String> {
    let path = path.trim();
    // URL parsers skip tab and newlines, which would hide a `//` prefix
    if path.is_empty() || path.chars().any(|c| c.is_ascii_control()) {
        return None;
    }

    if Url::parse(path).is_ok() {
        return None;
    }

    let path = match path.strip_prefix('/') {
        Some(_) => path.to_owned(),
        None => format!("/{path}"),
    };

    if is_protocol_relative(&path) {
        return None;
    }

    non_empty(truncate_chars(&path, max_length))
}

fn is_protocol_relative(path: &str) -> bool {
    path.starts_with("//") || path.starts_with("/\\")
}

fn truncate_chars(value: &str, max_length: usize) -> &str {
    match value.char_indices().nth(max_length) {
        Some((index, _)) => value[..index].trim_end(),
        None => value,
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
