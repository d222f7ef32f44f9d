//! Catalog lookup

use contracts::CatalogRecord;
use observability::record_lookup;
use tracing::warn;

/// Find the first record whose id equals `id`
///
/// Missing ids are not an error here. A diagnostic listing every known id
/// is logged and `None` returned so the caller decides what absence means.
pub fn find_recipe_meta<'a>(records: &'a [CatalogRecord], id: &str) -> Option<&'a CatalogRecord> {
    let found = records.iter().find(|record| record.id == id);
    record_lookup(found.is_some());

    if found.is_none() {
        warn!(r_id = %id, "{}", miss_diagnostic(records, id));
    }
    found
}

/// Message emitted when `id` is absent from `records`
pub fn miss_diagnostic(records: &[CatalogRecord], id: &str) -> String {
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    format!("Could not find r_id={id:?}. Got the following recipe_ids: {ids:?}")
}
