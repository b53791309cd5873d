use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use super::ClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    // a bare dot segment would be dropped by path normalization
    match value {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(value, PATH_SEGMENT).to_string(),
    }
}

/// Whether `{name}` appears in the path template.
pub(super) fn has_placeholder(path_pattern: &str, name: &str) -> bool {
    RE.captures_iter(path_pattern)
        .filter_map(|caps| caps.name("name"))
        .any(|found| found.as_str() == name)
}

/// Substitutes every placeholder of `path_pattern` with its percent-encoded value.
pub(super) fn resolve_path(
    path_pattern: &str,
    args: &IndexMap<String, String>,
) -> Result<String, ClientError> {
    let mut path = path_pattern.to_string();

    let mut names: HashSet<String> = RE
        .captures_iter(&path)
        .filter_map(|caps| caps.name("name"))
        .map(|found| found.as_str().to_string())
        .collect();

    if names.is_empty() {
        return Ok(path);
    }

    for (name, value) in args {
        if !names.remove(name) {
            warn!(?name, "argument name not found");
            continue;
        }
        if value.is_empty() {
            warn!(?name, path_pattern, "empty path parameter");
        }

        let encoded_value = encode_path_param_value(value);
        path = replace_path_param(&path, name, &encoded_value);

        if names.is_empty() {
            return Ok(path);
        }
    }

    let mut missings = names.into_iter().collect::<Vec<_>>();
    missings.sort();
    Err(ClientError::PathUnresolved { path, missings })
}
