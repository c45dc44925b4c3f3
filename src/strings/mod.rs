//! Localized string lookup over resolved string tables.
//!
//! A dotted key such as `MainMenu.LoginButton.Title` addresses the table
//! `MainMenu` and the in-table key `LoginButton.Title`. Flat `.strings`
//! tables are looked up literally; structured tables (property list, JSON)
//! are looked up by exact key first, then by dotted descent through nested
//! dictionaries.

mod table;

pub use table::{StringTable, StringsParseError, parse_strings};

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ResourceError;
use crate::objects::DecoderRegistry;

/// Split a dotted key into a candidate table name and the in-table remainder.
///
/// Keys without a dot (or with an empty half) address no table of their own
/// and go straight to the default table.
pub(crate) fn split_table_key(key: &str) -> Option<(&str, &str)> {
    key.split_once('.')
        .filter(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

/// Look `key` up inside a resolved string-table file.
///
/// The table grammar is chosen by the file's extension: `.strings` parses as
/// a flat table, anything else goes through the object decoder registry and
/// is treated as a (possibly nested) dictionary. A table that exists but
/// fails to parse surfaces as [`ResourceError::Malformed`]; it is never
/// silently skipped.
pub(crate) fn lookup_in_table(
    path: &Path,
    key: &str,
    decoders: &DecoderRegistry,
) -> Result<Option<String>, ResourceError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension.eq_ignore_ascii_case("strings") {
        let content = fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = parse_strings(&content).map_err(|source| ResourceError::Malformed {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        return Ok(table.get(key).cloned());
    }

    let value = decoders.decode(path)?;
    Ok(string_at_key_path(&value, key))
}

/// Resolve a possibly dotted key against a structured value.
///
/// An exact top-level key wins over nested descent, so flat tables that
/// happen to use dotted keys keep working when stored as dictionaries.
pub(crate) fn string_at_key_path(value: &Value, key: &str) -> Option<String> {
    if let Some(found) = value.get(key).and_then(Value::as_str) {
        return Some(found.to_string());
    }

    let mut current = value;
    for segment in key.split('.') {
        current = current.get(segment)?;
    }
    current.as_str().map(str::to_owned)
}
