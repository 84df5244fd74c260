//! Normalized chain records

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

pub mod query;
pub mod response;

pub use query::{ChainQuery, SortDirection, SortField, SortParseError};
pub use response::{Diagnostic, PipelineOutput};

/// Placeholder used when the directory omits a field
pub const NOT_AVAILABLE: &str = "N/A";

/// Ordered set of records; order reflects the last applied sort
pub type ChainRecordSet = Vec<ChainRecord>;

/// A yes/no column whose source value is not guaranteed to be a boolean
///
/// Ordering across variants is fixed: booleans first (`false < true`), then
/// unexpected text values lexicographically, then the "N/A" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FlagValue {
	/// A proper JSON boolean
	Flag(bool),
	/// Any other value, kept in its textual form
	Text(String),
	/// Field absent or null
	#[default]
	NotAvailable,
}

impl FlagValue {
	fn rank(&self) -> u8 {
		match self {
			Self::Flag(_) => 0,
			Self::Text(_) => 1,
			Self::NotAvailable => 2,
		}
	}

	/// Text shown to users and matched by the search filter
	pub fn display_text(&self) -> Cow<'_, str> {
		match self {
			Self::Flag(true) => Cow::Borrowed("true"),
			Self::Flag(false) => Cow::Borrowed("false"),
			Self::Text(text) => Cow::Borrowed(text.as_str()),
			Self::NotAvailable => Cow::Borrowed(NOT_AVAILABLE),
		}
	}
}

impl Ord for FlagValue {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Flag(a), Self::Flag(b)) => a.cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl PartialOrd for FlagValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for FlagValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display_text())
	}
}

impl Serialize for FlagValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Flag(value) => serializer.serialize_bool(*value),
			Self::Text(text) => serializer.serialize_str(text),
			Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
		}
	}
}

impl<'de> Deserialize<'de> for FlagValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			Flag(bool),
			Text(String),
		}

		Ok(match Option::<Wire>::deserialize(deserializer)? {
			Some(Wire::Flag(value)) => Self::Flag(value),
			Some(Wire::Text(text)) if text == NOT_AVAILABLE => Self::NotAvailable,
			Some(Wire::Text(text)) => Self::Text(text),
			None => Self::NotAvailable,
		})
	}
}

/// Fixed-shape chain entry produced by normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRecord {
	pub logo_uri: String,
	/// Always lowercase
	pub name: String,
	pub chain_id: String,
	pub pfm_enabled: FlagValue,
	pub chain_type: String,
	pub is_testnet: FlagValue,
	pub pretty_name: String,
	/// Empty rather than "N/A" when absent
	pub bech32_prefix: String,
}

impl Default for ChainRecord {
	fn default() -> Self {
		Self {
			logo_uri: NOT_AVAILABLE.to_string(),
			name: NOT_AVAILABLE.to_string(),
			chain_id: NOT_AVAILABLE.to_string(),
			pfm_enabled: FlagValue::NotAvailable,
			chain_type: NOT_AVAILABLE.to_string(),
			is_testnet: FlagValue::NotAvailable,
			pretty_name: NOT_AVAILABLE.to_string(),
			bech32_prefix: String::new(),
		}
	}
}

impl ChainRecord {
	/// Display text of a single column
	pub fn field_text(&self, field: SortField) -> Cow<'_, str> {
		match field {
			SortField::LogoUri => Cow::Borrowed(self.logo_uri.as_str()),
			SortField::Name => Cow::Borrowed(self.name.as_str()),
			SortField::ChainId => Cow::Borrowed(self.chain_id.as_str()),
			SortField::PfmEnabled => self.pfm_enabled.display_text(),
			SortField::ChainType => Cow::Borrowed(self.chain_type.as_str()),
			SortField::IsTestnet => self.is_testnet.display_text(),
			SortField::PrettyName => Cow::Borrowed(self.pretty_name.as_str()),
			SortField::Bech32Prefix => Cow::Borrowed(self.bech32_prefix.as_str()),
		}
	}

	/// Display text of every column in column order
	pub fn display_values(&self) -> impl Iterator<Item = Cow<'_, str>> {
		SortField::ALL.into_iter().map(move |field| self.field_text(field))
	}
}
