//! Fetch parameters sent to the chain directory

use serde::{Deserialize, Serialize};
use std::fmt;

/// Toggles selecting which chains the directory returns
///
/// The exact tuple is both the remote query and the cache key, so two values
/// compare equal only when all three toggles match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchParameters {
	pub include_evm: bool,
	pub include_svm: bool,
	pub only_testnets: bool,
}

impl FetchParameters {
	pub fn new(include_evm: bool, include_svm: bool, only_testnets: bool) -> Self {
		Self {
			include_evm,
			include_svm,
			only_testnets,
		}
	}

	/// Query string pairs with each toggle rendered as lowercase "true"/"false"
	pub fn query_pairs(&self) -> [(&'static str, &'static str); 3] {
		[
			("include_evm", bool_str(self.include_evm)),
			("include_svm", bool_str(self.include_svm)),
			("only_testnets", bool_str(self.only_testnets)),
		]
	}
}

impl Default for FetchParameters {
	fn default() -> Self {
		Self::new(true, true, false)
	}
}

impl fmt::Display for FetchParameters {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"include_evm={} include_svm={} only_testnets={}",
			self.include_evm, self.include_svm, self.only_testnets
		)
	}
}

fn bool_str(value: bool) -> &'static str {
	if value {
		"true"
	} else {
		"false"
	}
}
