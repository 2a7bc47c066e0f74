//! Apache-style `.types` file parsing.
//!
//! One record per line: a MIME type followed by zero or more extensions,
//! separated by whitespace. `#` starts a comment that runs to the end of the
//! line unless it is escaped as `\#`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{MimeError, MimeResult};

/// Locations of system-wide `.types` files, checked in this order.
pub const SYSTEM_TYPES_FILES: &[&str] = &[
    "/etc/mime.types",
    "/etc/apache2/mime.types",
    "/etc/apache/mime.types",
    "/etc/httpd/conf/mime.types",
];

/// Parses `.types` text into `(type, extensions)` records.
///
/// Records keep the order in which each type first appears. When a type is
/// listed on several lines the last line's extensions replace the earlier
/// ones. Type-only lines are kept with an empty extension list.
pub fn parse_types(text: &str) -> Vec<(String, Vec<String>)> {
    let mut records: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = trim_ascii(line);
        if line.is_empty() {
            continue;
        }

        let line = trim_ascii(strip_comment(line));
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_ascii_whitespace().map(unescape_field);
        let Some(mime_type) = fields.next() else {
            continue;
        };
        let exts: Vec<String> = fields.collect();
        if exts.is_empty() {
            tracing::trace!("Line {}: type {} has no extensions", lineno + 1, mime_type);
        }

        match index.get(&mime_type) {
            Some(&i) => records[i].1 = exts,
            None => {
                index.insert(mime_type.clone(), records.len());
                records.push((mime_type, exts));
            }
        }
    }

    records
}

// Only ASCII whitespace separates fields; a non-breaking space stays inside one.
fn trim_ascii(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii_whitespace())
}

fn unescape_field(field: &str) -> String {
    field.replace("\\#", "#")
}

fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '#' if !escaped => return &line[..i],
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    line
}

// Bytes that are not UTF-8 (e.g. a Latin-1 comment) are replaced, not rejected.
pub(crate) fn read_types_file(path: &Path) -> MimeResult<Vec<(String, Vec<String>)>> {
    let bytes = std::fs::read(path).map_err(|e| MimeError::file_access(path, e))?;
    Ok(parse_types(&String::from_utf8_lossy(&bytes)))
}

pub(crate) async fn read_types_file_async(path: &Path) -> MimeResult<Vec<(String, Vec<String>)>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| MimeError::file_access(path, e))?;
    Ok(parse_types(&String::from_utf8_lossy(&bytes)))
}

/// System `.types` files followed by the user's `~/.mime.types`.
pub fn system_types_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = SYSTEM_TYPES_FILES.iter().map(PathBuf::from).collect();
    if let Some(dirs) = directories::UserDirs::new() {
        paths.push(dirs.home_dir().join(".mime.types"));
    }
    paths
}
