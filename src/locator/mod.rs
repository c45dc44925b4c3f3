//! Candidate enumeration and first-hit resolution for bundle resources.
//!
//! The search space is nested, most specific first: localized subdirectory
//! before the plain directory, then every suffix combination of the device
//! profile, then the caller's extensions in the order given. The first
//! candidate that exists on disk wins and the search short-circuits.

mod candidates;
mod probe;

pub use candidates::candidate_file_names;

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::variants::DeviceProfile;

use probe::DirectoryProbe;

/// One resolution request: a logical file identifier plus its variant inputs.
///
/// The extension order is the tie-break priority; when several candidates
/// exist the first combination in search order wins.
#[derive(Debug, Clone)]
pub struct ResourceQuery {
    /// File name without suffixes or extension, category prefix included.
    pub base: String,
    /// Directory relative to the bundle root; `None` searches the root.
    pub directory: Option<String>,
    /// Extensions to try, in priority order. Empty means an empty search
    /// space, which resolves to nothing.
    pub extensions: Vec<String>,
    /// Language code for the `<language>.lproj/` subdirectory, if any.
    pub language: Option<String>,
    /// Match extensions case-insensitively (image lookups conventionally do).
    pub fold_extension_case: bool,
}

impl ResourceQuery {
    /// Query for `base` with the given extensions, searching the bundle root
    /// without localization and with exact extension matching.
    pub fn new(
        base: impl Into<String>,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            base: base.into(),
            directory: None,
            extensions: extensions.into_iter().map(Into::into).collect(),
            language: None,
            fold_extension_case: false,
        }
    }
}

/// Resolver walking the fixed-priority variant space against the filesystem.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
    profile: DeviceProfile,
}

impl Locator {
    /// Locator rooted at the bundle directory, resolving for `profile`.
    pub fn new(root: impl Into<PathBuf>, profile: DeviceProfile) -> Self {
        Self {
            root: root.into(),
            profile,
        }
    }

    /// Bundle root all lookups are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Device profile the locator resolves for.
    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    /// Every path the query can resolve to, in probe order.
    ///
    /// [`Locator::resolve`] probes exactly this sequence, so the priority
    /// contract can be asserted without touching the filesystem.
    pub fn search_paths(&self, query: &ResourceQuery) -> Vec<PathBuf> {
        let names = candidate_file_names(query, &self.profile);
        let mut paths = Vec::new();
        for dir in self.search_directories(query) {
            for name in &names {
                paths.push(dir.join(name));
            }
        }
        paths
    }

    /// Find the first existing file for the query.
    ///
    /// Absence is an expected outcome and returns `None`; unreadable
    /// directories count the same as missing ones. Given an unchanged bundle,
    /// identical queries always resolve to the identical path.
    pub fn resolve(&self, query: &ResourceQuery) -> Option<PathBuf> {
        let names = candidate_file_names(query, &self.profile);
        if names.is_empty() {
            warn!("empty extension list for {:?}, nothing to search", query.base);
            return None;
        }

        let mut probe = DirectoryProbe::new();
        for dir in self.search_directories(query) {
            for name in &names {
                if let Some(path) = probe.find(&dir, name, query.fold_extension_case) {
                    debug!("resolved {:?} to {}", query.base, path.display());
                    return Some(path);
                }
            }
        }

        debug!("no candidate found for {:?}", query.base);
        None
    }

    /// Directories to search, the localized subdirectory first when the query
    /// carries a language.
    fn search_directories(&self, query: &ResourceQuery) -> Vec<PathBuf> {
        let base = match &query.directory {
            Some(directory) => self.root.join(directory),
            None => self.root.clone(),
        };

        let mut directories = Vec::with_capacity(2);
        if let Some(language) = &query.language {
            directories.push(base.join(format!("{language}.lproj")));
        }
        directories.push(base);
        directories
    }
}
