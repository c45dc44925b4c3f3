//! Extension-dispatched object deserialization.
//!
//! The object loader does not interpret file contents itself; it picks a
//! decoder by the resolved file's extension and hands back whatever root
//! value the decoder produced. Property lists, JSON and YAML are built in,
//! and callers can register decoders for their own archive extensions.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ResourceError;

/// Decoder turning a resolved file into a structured value.
///
/// The root value may be a dictionary, a sequence or a scalar; the loader
/// passes it through untouched.
pub type ObjectDecoder = fn(&Path) -> Result<Value, Box<dyn Error + Send + Sync>>;

/// Extension-keyed decoder table.
///
/// Extensions compare case-insensitively. The default registry understands
/// `plist` (XML and binary), `json`, `yaml` and `yml`.
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    decoders: BTreeMap<String, ObjectDecoder>,
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self {
            decoders: BTreeMap::new(),
        };
        registry.register("plist", decode_plist);
        registry.register("json", decode_json);
        registry.register("yaml", decode_yaml);
        registry.register("yml", decode_yaml);
        registry
    }
}

impl DecoderRegistry {
    /// Map an extension to a decoder, replacing any previous mapping.
    pub fn register(&mut self, extension: &str, decoder: ObjectDecoder) {
        self.decoders
            .insert(extension.to_ascii_lowercase(), decoder);
    }

    /// Decode a resolved file, dispatching on its extension.
    ///
    /// A file with no registered decoder counts as malformed: it resolved,
    /// but nothing can interpret it, which points at a packaging mistake.
    pub fn decode(&self, path: &Path) -> Result<Value, ResourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let Some(decoder) = self.decoders.get(&extension) else {
            return Err(ResourceError::Malformed {
                path: path.to_path_buf(),
                source: format!("no decoder registered for extension {extension:?}").into(),
            });
        };

        decoder(path).map_err(|source| ResourceError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn decode_json(path: &Path) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn decode_yaml(path: &Path) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

fn decode_plist(path: &Path) -> Result<Value, Box<dyn Error + Send + Sync>> {
    let value = plist::Value::from_file(path)?;
    Ok(serde_json::to_value(&value)?)
}
