//! Device variant axes and suffix enumeration.
//!
//! A bundle can carry several physical files for one logical asset, each
//! distinguished by a file-name suffix: pixel scale (`@2x`), screen-height
//! markers (`-568`) and device-family markers (`~iphone`). Each dimension is
//! modelled as a [`VariantAxis`] and the fixed-priority list of axes for a
//! device is a [`DeviceProfile`].

use std::collections::BTreeSet;

/// One dimension of file-name variation.
///
/// Suffixes are ordered most-specific-first and always end with the empty
/// suffix, so every axis can fall back to an unsuffixed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    suffixes: Vec<String>,
}

impl VariantAxis {
    /// Build an axis from explicit suffixes, most specific first.
    ///
    /// The empty fallback suffix is appended when not already present.
    pub fn new(suffixes: impl IntoIterator<Item = String>) -> Self {
        let mut suffixes: Vec<String> = suffixes.into_iter().collect();
        if suffixes.last().is_none_or(|last| !last.is_empty()) {
            suffixes.push(String::new());
        }
        Self { suffixes }
    }

    /// Axis that only ever produces unsuffixed names.
    pub fn none() -> Self {
        Self {
            suffixes: vec![String::new()],
        }
    }

    /// Axis for an optional marker suffix, e.g. a tall-screen `-568` or a
    /// device-family `~iphone`.
    pub fn marker(marker: Option<&str>) -> Self {
        Self::new(marker.into_iter().map(str::to_owned))
    }

    /// Axis for a pixel scale, highest first: scale 3 yields `@3x`, `@2x`,
    /// then the unsuffixed fallback; scale 1 yields only the fallback.
    pub fn scale(scale: u32) -> Self {
        Self::new((2..=scale).rev().map(|value| format!("@{value}x")))
    }

    /// Suffixes in search order.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

/// Variant description for the device performing lookups.
///
/// The axis order is the search priority: earlier axes vary slowest, so their
/// suffixes outrank everything that follows.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    axes: Vec<VariantAxis>,
    scale: u32,
}

impl DeviceProfile {
    /// Profile with the conventional axis priority: screen-height marker,
    /// then pixel scale, then device-family marker.
    pub fn new(screen: Option<&str>, scale: u32, family: Option<&str>) -> Self {
        Self {
            axes: vec![
                VariantAxis::marker(screen),
                VariantAxis::scale(scale),
                VariantAxis::marker(family),
            ],
            scale: scale.max(1),
        }
    }

    /// Profile that only matches unsuffixed file names.
    pub fn plain() -> Self {
        Self {
            axes: vec![VariantAxis::none()],
            scale: 1,
        }
    }

    /// Replace the axis list wholesale, keeping the order given as the
    /// search priority. Useful when porting the naming convention to another
    /// platform.
    pub fn with_axes(mut self, axes: Vec<VariantAxis>) -> Self {
        self.axes = axes;
        self
    }

    /// Pixel scale reported for decoded images.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// All combined suffix strings in search order, most specific first.
    ///
    /// Axes combine as a left-to-right cartesian product, so the first axis
    /// varies slowest. Duplicate combinations collapse to their first
    /// occurrence, and the final entry is always the empty suffix.
    pub fn suffix_combinations(&self) -> Vec<String> {
        let mut combined = vec![String::new()];
        for axis in &self.axes {
            let mut next = Vec::with_capacity(combined.len() * axis.suffixes().len());
            for prefix in &combined {
                for suffix in axis.suffixes() {
                    next.push(format!("{prefix}{suffix}"));
                }
            }
            combined = next;
        }

        let mut seen = BTreeSet::new();
        combined.retain(|value| seen.insert(value.clone()));
        combined
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_axis_orders_highest_first() {
        assert_eq!(VariantAxis::scale(3).suffixes(), ["@3x", "@2x", ""]);
        assert_eq!(VariantAxis::scale(2).suffixes(), ["@2x", ""]);
        assert_eq!(VariantAxis::scale(1).suffixes(), [""]);
    }

    #[test]
    fn marker_axis_falls_back_to_unsuffixed() {
        assert_eq!(VariantAxis::marker(Some("~ipad")).suffixes(), ["~ipad", ""]);
        assert_eq!(VariantAxis::marker(None).suffixes(), [""]);
    }

    #[test]
    fn combines_axes_most_specific_first() {
        let profile = DeviceProfile::new(Some("-568"), 2, Some("~iphone"));

        assert_eq!(profile.suffix_combinations(), vec![
            "-568@2x~iphone".to_string(),
            "-568@2x".to_string(),
            "-568~iphone".to_string(),
            "-568".to_string(),
            "@2x~iphone".to_string(),
            "@2x".to_string(),
            "~iphone".to_string(),
            String::new(),
        ]);
    }

    #[test]
    fn plain_profile_produces_only_the_empty_suffix() {
        assert_eq!(DeviceProfile::plain().suffix_combinations(), vec![
            String::new()
        ]);
    }

    #[test]
    fn deduplicates_repeated_combinations() {
        let profile =
            DeviceProfile::plain().with_axes(vec![VariantAxis::none(), VariantAxis::none()]);
        assert_eq!(profile.suffix_combinations(), vec![String::new()]);
    }
}
