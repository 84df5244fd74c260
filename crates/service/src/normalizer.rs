//! Normalization of raw directory payloads
//!
//! This is the only place that reads the loosely-typed directory JSON. Every
//! record leaving here has all eight columns populated.

use glossary_types::{ChainRecord, FlagValue, SortField, NOT_AVAILABLE};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Top-level key holding the chain entries
pub const CHAINS_KEY: &str = "chains";

/// Convert a raw payload into fixed-shape records
///
/// Returns an empty vec when the payload is missing, is not an object, or
/// has no `chains` array. Entries that are not objects are skipped.
pub fn normalize(raw: Option<&Value>) -> Vec<ChainRecord> {
	let Some(chains) = raw
		.and_then(Value::as_object)
		.and_then(|payload| payload.get(CHAINS_KEY))
		.and_then(Value::as_array)
	else {
		warn!("Invalid or empty data received");
		return Vec::new();
	};

	let records: Vec<ChainRecord> = chains
		.iter()
		.enumerate()
		.filter_map(|(index, entry)| match entry.as_object() {
			Some(entry) => Some(normalize_entry(entry)),
			None => {
				warn!("Skipping chain entry {} that is not an object", index);
				None
			},
		})
		.collect();

	debug!("Processed {} chains", records.len());
	records
}

/// Extract the eight columns from one directory entry; extra keys are dropped
pub fn normalize_entry(entry: &Map<String, Value>) -> ChainRecord {
	ChainRecord {
		logo_uri: text_field(entry, SortField::LogoUri, NOT_AVAILABLE),
		name: name_field(entry),
		chain_id: text_field(entry, SortField::ChainId, NOT_AVAILABLE),
		pfm_enabled: flag_field(entry, SortField::PfmEnabled),
		chain_type: text_field(entry, SortField::ChainType, NOT_AVAILABLE),
		is_testnet: flag_field(entry, SortField::IsTestnet),
		pretty_name: text_field(entry, SortField::PrettyName, NOT_AVAILABLE),
		bech32_prefix: text_field(entry, SortField::Bech32Prefix, ""),
	}
}

/// Present, non-null value for a column
fn present<'a>(entry: &'a Map<String, Value>, field: SortField) -> Option<&'a Value> {
	entry.get(field.wire_key()).filter(|value| !value.is_null())
}

fn text_field(entry: &Map<String, Value>, field: SortField, default: &str) -> String {
	present(entry, field)
		.map(value_text)
		.unwrap_or_else(|| default.to_string())
}

fn name_field(entry: &Map<String, Value>) -> String {
	present(entry, SortField::Name)
		.map(|value| value_text(value).to_lowercase())
		.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn flag_field(entry: &Map<String, Value>, field: SortField) -> FlagValue {
	match present(entry, field) {
		Some(Value::Bool(value)) => FlagValue::Flag(*value),
		// same reading as FlagValue's Deserialize
		Some(Value::String(text)) if text == NOT_AVAILABLE => FlagValue::NotAvailable,
		Some(other) => FlagValue::Text(value_text(other)),
		None => FlagValue::NotAvailable,
	}
}

/// Strings as-is, anything else as its JSON text
fn value_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
