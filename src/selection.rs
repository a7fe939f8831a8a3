//! Map an external country name onto its dataset entry.

use crate::models::{Country, Dataset};

/// Find the country whose display name equals `name` exactly (case-sensitive).
///
/// Names are expected to be unique. If they are not, the first match in dataset order
/// is returned and later duplicates are unreachable through this lookup.
pub fn resolve<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Country> {
    dataset.iter().find(|c| c.name == name)
}

/// Country names in dataset order, as offered for selection.
pub fn country_names(dataset: &Dataset) -> Vec<&str> {
    dataset.iter().map(|c| c.name.as_str()).collect()
}
