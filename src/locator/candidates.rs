use std::collections::BTreeSet;

use crate::variants::DeviceProfile;

use super::ResourceQuery;

/// Generate candidate file names for a query, in search order.
///
/// Every suffix combination of the profile expands against every extension in
/// the order the caller supplied, producing names such as
/// `Train-568@2x~iphone.png` long before the bare `Train.png` fallback. The
/// extension loop is innermost, so suffix specificity always outranks the
/// extension preference.
pub fn candidate_file_names(query: &ResourceQuery, profile: &DeviceProfile) -> Vec<String> {
    if query.extensions.is_empty() {
        return Vec::new();
    }

    let mut seen = BTreeSet::new();
    let mut result = Vec::new();
    for suffix in profile.suffix_combinations() {
        for extension in &query.extensions {
            let name = format!("{}{}.{}", query.base, suffix, extension);
            if seen.insert(name.clone()) {
                result.push(name);
            }
        }
    }
    result
}
