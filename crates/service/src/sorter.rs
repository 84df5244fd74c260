//! Stable column sorting

use glossary_types::{ChainRecord, SortDirection, SortField};
use std::cmp::Ordering;

/// Compare two records on one column in ascending order
///
/// `name` compares case-insensitively, flag columns use the [`FlagValue`]
/// cross-type order, everything else compares the raw strings.
///
/// [`FlagValue`]: glossary_types::FlagValue
pub fn compare_records(a: &ChainRecord, b: &ChainRecord, field: SortField) -> Ordering {
	match field {
		SortField::Name => caseless(&a.name).cmp(caseless(&b.name)),
		SortField::PfmEnabled => a.pfm_enabled.cmp(&b.pfm_enabled),
		SortField::IsTestnet => a.is_testnet.cmp(&b.is_testnet),
		other => a.field_text(other).cmp(&b.field_text(other)),
	}
}

/// Return a new vec ordered by `field`; ties keep their input order
pub fn sort_records(
	records: &[ChainRecord],
	field: SortField,
	direction: SortDirection,
) -> Vec<ChainRecord> {
	let mut sorted = records.to_vec();
	match direction {
		SortDirection::Asc => sorted.sort_by(|a, b| compare_records(a, b, field)),
		SortDirection::Desc => sorted.sort_by(|a, b| compare_records(b, a, field)),
	}
	sorted
}

fn caseless(value: &str) -> impl Iterator<Item = char> + '_ {
	value.chars().flat_map(char::to_lowercase)
}
