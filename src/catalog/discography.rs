use std::collections::HashMap;

use super::{CatalogItem, ReleaseType, TypePolicy, essence};
use crate::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Prefer the lowest sampling rate among the highest bit depth editions.
    pub save_space: bool,
    /// Drop deluxe, live, collector's and similar editions.
    pub skip_extras: bool,
}

/// Reduces an artist catalog to one release per title.
///
/// Releases are grouped by [`essence`]. Within a group only the editions at
/// the best bit depth and the preferred sampling rate are eligible, releases
/// credited to another artist are dropped, remasters win over originals when
/// any exist, and extras are dropped when `skip_extras` is set. Each group
/// keeps at most one release: the first eligible one in input order. Eligible
/// editions tie on every compared attribute, so which one survives is an
/// arbitrary choice.
///
/// Groups appear in the output in the order they were first seen.
pub fn filter_discography(
    items: &[CatalogItem],
    requested_artist: &str,
    options: FilterOptions,
) -> Vec<CatalogItem> {
    filter_discography_with(TypePolicy::standard(), items, requested_artist, options)
}

/// [`filter_discography`] with a custom classification table.
pub fn filter_discography_with(
    policy: &TypePolicy,
    items: &[CatalogItem],
    requested_artist: &str,
    options: FilterOptions,
) -> Vec<CatalogItem> {
    group_by_essence(items)
        .iter()
        .filter_map(|group| select_representative(policy, group, requested_artist, options))
        .cloned()
        .collect()
}

fn group_by_essence(items: &[CatalogItem]) -> Vec<Vec<&CatalogItem>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&CatalogItem>> = Vec::new();

    for item in items {
        let key = essence(&item.title);
        match index.get(&key) {
            Some(&pos) => groups[pos].push(item),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![item]);
            }
        }
    }

    groups
}

fn select_representative<'a>(
    policy: &TypePolicy,
    group: &[&'a CatalogItem],
    requested_artist: &str,
    options: FilterOptions,
) -> Option<&'a CatalogItem> {
    let best_bit_depth = group.iter().map(|item| item.max_bit_depth).max()?;

    let rates = group
        .iter()
        .filter(|item| item.max_bit_depth == best_bit_depth)
        .map(|item| item.max_sampling_rate);
    let best_sampling_rate = if options.save_space {
        rates.fold(f64::INFINITY, f64::min)
    } else {
        rates.fold(f64::NEG_INFINITY, f64::max)
    };

    let remaster_exists = group
        .iter()
        .any(|item| policy.is_type(ReleaseType::Remaster, item));

    let is_valid = |item: &CatalogItem| {
        item.max_bit_depth == best_bit_depth
            && item.max_sampling_rate == best_sampling_rate
            && item.artist_name == requested_artist
            && !(remaster_exists && !policy.is_type(ReleaseType::Remaster, item))
            && !(options.skip_extras && policy.is_type(ReleaseType::Extra, item))
    };

    for item in group {
        debug!(
            "{} - {} ({} by {}) {}",
            item.title,
            item.version.as_deref().unwrap_or("~~"),
            item.quality_label(),
            item.artist_name,
            item.id
        );
    }

    group.iter().copied().find(|item| is_valid(*item))
}
