//! Lookup configuration: language, prefixes and extension lists.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// File name probed by [`ResourceConfig::discover`] at the bundle root.
pub const DEFAULT_CONFIG_FILE: &str = "resources.config.json";

/// Configuration read on every lookup and fixed after construction.
///
/// Owned by a [`crate::Resources`] instance rather than living in process
/// globals; no lookup mutates it. The extension lists are priority orders:
/// the first combination that exists on disk wins.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// ISO language code for localized lookups. `None` skips the localized
    /// subdirectories entirely.
    pub language: Option<String>,
    /// Directory searched by the convenience lookups; `None` means the
    /// bundle root.
    pub default_directory: Option<String>,
    /// Table consulted when a string key names no table of its own.
    pub strings_default_table: String,
    /// File-name prefix shared by all string tables.
    pub strings_prefix: String,
    /// Extensions treated as string tables, in priority order.
    pub strings_extensions: Vec<String>,
    /// File-name prefix shared by all images.
    pub images_prefix: String,
    /// Image extensions, in priority order; matched case-insensitively.
    pub images_extensions: Vec<String>,
    /// File-name prefix shared by all object files.
    pub objects_prefix: String,
    /// Object extensions, in priority order.
    pub objects_extensions: Vec<String>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            language: None,
            default_directory: None,
            strings_default_table: "Localizable".into(),
            strings_prefix: String::new(),
            strings_extensions: vec!["strings".into(), "plist".into()],
            images_prefix: String::new(),
            images_extensions: vec!["png".into(), "jpg".into(), "jpeg".into()],
            objects_prefix: String::new(),
            objects_extensions: vec!["plist".into(), "json".into()],
        }
    }
}

impl ResourceConfig {
    /// Attempt to load configuration from the bundle root.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so lookups can continue with the conventional
    /// table names and extension lists.
    pub fn discover(bundle_dir: &Path) -> Self {
        let candidate = bundle_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
