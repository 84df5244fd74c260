//! Free-text filtering across all columns

use glossary_types::ChainRecord;
use tracing::debug;

/// Keep records where `query` occurs in any column, ignoring case
///
/// Matching is literal substring containment on the display text of each
/// column, sentinels included. An empty query keeps every record in order.
pub fn filter_records(records: &[ChainRecord], query: &str) -> Vec<ChainRecord> {
	if query.is_empty() {
		return records.to_vec();
	}

	let needle = query.to_lowercase();
	let filtered: Vec<ChainRecord> = records
		.iter()
		.filter(|record| matches(record, &needle))
		.cloned()
		.collect();

	debug!(
		"Filtered {} of {} chains with search term: {}",
		filtered.len(),
		records.len(),
		query
	);
	filtered
}

fn matches(record: &ChainRecord, needle: &str) -> bool {
	record
		.display_values()
		.any(|value| value.to_lowercase().contains(needle))
}
