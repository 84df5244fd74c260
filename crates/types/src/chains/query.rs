//! User-supplied query: toggles, search text and sort specification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::params::FetchParameters;

/// Errors raised when parsing sort options from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortParseError {
	#[error("Unknown sort field: {0}")]
	UnknownField(String),

	#[error("Unknown sort direction: {0} (expected 'asc' or 'desc')")]
	UnknownDirection(String),
}

/// One of the eight record columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
	LogoUri,
	#[default]
	Name,
	ChainId,
	PfmEnabled,
	ChainType,
	IsTestnet,
	PrettyName,
	Bech32Prefix,
}

impl SortField {
	/// All columns in display order
	pub const ALL: [SortField; 8] = [
		Self::LogoUri,
		Self::Name,
		Self::ChainId,
		Self::PfmEnabled,
		Self::ChainType,
		Self::IsTestnet,
		Self::PrettyName,
		Self::Bech32Prefix,
	];

	/// Key used in normalized JSON output
	pub fn key(&self) -> &'static str {
		match self {
			Self::LogoUri => "logoUri",
			Self::Name => "name",
			Self::ChainId => "chainId",
			Self::PfmEnabled => "pfmEnabled",
			Self::ChainType => "chainType",
			Self::IsTestnet => "isTestnet",
			Self::PrettyName => "prettyName",
			Self::Bech32Prefix => "bech32Prefix",
		}
	}

	/// Key used by the remote directory
	pub fn wire_key(&self) -> &'static str {
		match self {
			Self::LogoUri => "logo_uri",
			Self::Name => "chain_name",
			Self::ChainId => "chain_id",
			Self::PfmEnabled => "pfm_enabled",
			Self::ChainType => "chain_type",
			Self::IsTestnet => "is_testnet",
			Self::PrettyName => "pretty_name",
			Self::Bech32Prefix => "bech32_prefix",
		}
	}

	/// Column header
	pub fn label(&self) -> &'static str {
		match self {
			Self::LogoUri => "Logo URI",
			Self::Name => "Name",
			Self::ChainId => "Chain ID",
			Self::PfmEnabled => "PFM Enabled",
			Self::ChainType => "Chain Type",
			Self::IsTestnet => "Is Testnet",
			Self::PrettyName => "Pretty Name",
			Self::Bech32Prefix => "Bech32 Prefix",
		}
	}
}

impl fmt::Display for SortField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Accepts the output key, the wire key or the column label, ignoring case,
/// spaces, dashes and underscores.
impl FromStr for SortField {
	type Err = SortParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let folded: String = s
			.chars()
			.filter(|c| !matches!(c, ' ' | '_' | '-'))
			.flat_map(char::to_lowercase)
			.collect();

		match folded.as_str() {
			"logouri" | "logo" => Ok(Self::LogoUri),
			"name" | "chainname" => Ok(Self::Name),
			"chainid" | "id" => Ok(Self::ChainId),
			"pfmenabled" | "pfm" => Ok(Self::PfmEnabled),
			"chaintype" | "type" => Ok(Self::ChainType),
			"istestnet" | "testnet" => Ok(Self::IsTestnet),
			"prettyname" => Ok(Self::PrettyName),
			"bech32prefix" | "bech32" => Ok(Self::Bech32Prefix),
			_ => Err(SortParseError::UnknownField(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Asc => f.write_str("asc"),
			Self::Desc => f.write_str("desc"),
		}
	}
}

impl FromStr for SortDirection {
	type Err = SortParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Asc),
			"desc" | "descending" => Ok(Self::Desc),
			_ => Err(SortParseError::UnknownDirection(s.to_string())),
		}
	}
}

/// Everything one pipeline run needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainQuery {
	pub params: FetchParameters,
	/// Free-text search; empty keeps every record
	pub search: String,
	pub sort_by: SortField,
	pub direction: SortDirection,
}

impl ChainQuery {
	pub fn new(params: FetchParameters) -> Self {
		Self {
			params,
			..Default::default()
		}
	}

	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		self.search = search.into();
		self
	}

	pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
		self.sort_by = field;
		self.direction = direction;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sort_field_accepts_all_spellings() {
		for field in SortField::ALL {
			assert_eq!(field.key().parse::<SortField>().unwrap(), field);
			assert_eq!(field.wire_key().parse::<SortField>().unwrap(), field);
			assert_eq!(field.label().parse::<SortField>().unwrap(), field);
		}
		assert_eq!("CHAIN-ID".parse::<SortField>().unwrap(), SortField::ChainId);
	}

	#[test]
	fn test_sort_field_rejects_unknown() {
		let err = "height".parse::<SortField>().unwrap_err();
		assert_eq!(err, SortParseError::UnknownField("height".to_string()));
	}

	#[test]
	fn test_sort_direction_parsing() {
		assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
		assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
		assert_eq!(
			"descending".parse::<SortDirection>().unwrap(),
			SortDirection::Desc
		);
		assert!("sideways".parse::<SortDirection>().is_err());
	}

	#[test]
	fn test_query_defaults_sort_by_name_ascending() {
		let query = ChainQuery::default();
		assert_eq!(query.sort_by, SortField::Name);
		assert_eq!(query.direction, SortDirection::Asc);
		assert!(query.search.is_empty());
		assert_eq!(query.params, FetchParameters::default());
	}
}
