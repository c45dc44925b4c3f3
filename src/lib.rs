#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod images;
pub mod locator;
pub mod objects;
pub mod resources;
pub mod strings;
pub mod variants;

pub use config::ResourceConfig;
pub use error::ResourceError;
pub use images::ScaledImage;
pub use locator::{Locator, ResourceQuery};
pub use objects::{DecoderRegistry, ObjectDecoder};
pub use resources::Resources;
pub use variants::{DeviceProfile, VariantAxis};
