//! High-level loader facade owning configuration and decoders.

use std::path::PathBuf;

use log::{debug, warn};
use serde_json::Value;

use crate::config::ResourceConfig;
use crate::error::ResourceError;
use crate::images::{self, ScaledImage};
use crate::locator::{Locator, ResourceQuery};
use crate::objects::{DecoderRegistry, ObjectDecoder};
use crate::strings;
use crate::variants::DeviceProfile;

/// Bundle-wide resource loader.
///
/// Owns the bundle root, lookup configuration, device profile and object
/// decoder registry. Configure it once at startup; lookups never mutate it,
/// so a constructed instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Resources {
    locator: Locator,
    config: ResourceConfig,
    decoders: DecoderRegistry,
}

impl Resources {
    /// Loader for the given bundle root, discovering configuration from
    /// `resources.config.json` at the root when present.
    pub fn new(root: impl Into<PathBuf>, profile: DeviceProfile) -> Self {
        let root = root.into();
        let config = ResourceConfig::discover(&root);
        Self::with_config(root, profile, config)
    }

    /// Loader with an explicit configuration.
    pub fn with_config(
        root: impl Into<PathBuf>,
        profile: DeviceProfile,
        config: ResourceConfig,
    ) -> Self {
        Self {
            locator: Locator::new(root, profile),
            config,
            decoders: DecoderRegistry::default(),
        }
    }

    /// The underlying locator.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Active lookup configuration.
    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    /// Map an object-file extension to a custom decoder, e.g. for archive
    /// formats the built-in registry does not know.
    pub fn register_object_decoder(&mut self, extension: &str, decoder: ObjectDecoder) {
        self.decoders.register(extension, decoder);
    }

    /// Find the first existing file for `base` under `directory`, trying
    /// `extensions` in order. `None` searches the bundle root itself.
    pub fn locate(
        &self,
        base: &str,
        directory: Option<&str>,
        extensions: &[&str],
    ) -> Option<PathBuf> {
        let query = ResourceQuery {
            base: base.to_string(),
            directory: directory.map(str::to_owned),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            language: self.config.language.clone(),
            fold_extension_case: false,
        };
        self.locator.resolve(&query)
    }

    /// Convenience lookup for a full file name such as `"Train.png"`.
    ///
    /// Splits the extension off and searches the configured default
    /// directory. Names without an extension cannot match anything.
    pub fn locate_file(&self, file_name: &str) -> Option<PathBuf> {
        let Some((base, extension)) = file_name.rsplit_once('.') else {
            warn!("no extension in file name {file_name:?}, nothing to search");
            return None;
        };
        self.locate(base, self.config.default_directory.as_deref(), &[extension])
    }

    /// Localized string lookup for a dotted key.
    ///
    /// `MainMenu.LoginButton.Title` first tries the table `MainMenu` with the
    /// key `LoginButton.Title`; when the table is missing or the key absent,
    /// it falls back to the default table with the full original key. Keys
    /// without a dot go straight to the default table. `Ok(None)` means
    /// neither resolves; a table that exists but fails to parse is an error.
    pub fn string(&self, key: &str) -> Result<Option<String>, ResourceError> {
        if let Some((table, rest)) = strings::split_table_key(key) {
            if let Some(path) = self.locate_strings_table(table) {
                if let Some(value) = strings::lookup_in_table(&path, rest, &self.decoders)? {
                    return Ok(Some(value));
                }
                debug!(
                    "key {rest:?} not in {}, falling back to table {:?}",
                    path.display(),
                    self.config.strings_default_table
                );
            }
        }

        let Some(path) = self.locate_strings_table(&self.config.strings_default_table) else {
            warn!("string {key:?} not found, no table resolves");
            return Ok(None);
        };

        let value = strings::lookup_in_table(&path, key, &self.decoders)?;
        if value.is_none() {
            warn!("string {key:?} not found in {}", path.display());
        }
        Ok(value)
    }

    /// Decoded image lookup for a logical key.
    ///
    /// Searches `<images_prefix><key>` with the configured image extensions,
    /// matching extension case insensitively, and decodes the first hit. The
    /// scale marker of the resolved file name carries into the result.
    pub fn image(&self, key: &str) -> Result<Option<ScaledImage>, ResourceError> {
        let base = format!("{}{}", self.config.images_prefix, key);
        let Some(path) = self.resolve_category(base, &self.config.images_extensions, true) else {
            return Ok(None);
        };
        images::decode_image(&path).map(Some)
    }

    /// Structured object lookup for a logical key.
    ///
    /// Searches `<objects_prefix><key>` with the configured object extensions
    /// and deserializes the first hit through the decoder registry. The root
    /// value may be a dictionary, a sequence or a scalar.
    pub fn object(&self, key: &str) -> Result<Option<Value>, ResourceError> {
        let base = format!("{}{}", self.config.objects_prefix, key);
        let Some(path) = self.resolve_category(base, &self.config.objects_extensions, false)
        else {
            return Ok(None);
        };
        self.decoders.decode(&path).map(Some)
    }

    fn locate_strings_table(&self, table: &str) -> Option<PathBuf> {
        let base = format!("{}{}", self.config.strings_prefix, table);
        self.resolve_category(base, &self.config.strings_extensions, false)
    }

    fn resolve_category(
        &self,
        base: String,
        extensions: &[String],
        fold_extension_case: bool,
    ) -> Option<PathBuf> {
        let query = ResourceQuery {
            base,
            directory: self.config.default_directory.clone(),
            extensions: extensions.to_vec(),
            language: self.config.language.clone(),
            fold_extension_case,
        };
        self.locator.resolve(&query)
    }
}
