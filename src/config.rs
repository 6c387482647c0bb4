//! Module settings shared by the aggregator and the client settings builder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dupecheck_provider_api::SearchModeConfig;

/// Which items a widget searches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
	/// Search every item regardless of type.
	All,
	/// Restrict searches to the type and bundle of the item being edited.
	#[default]
	ContentType,
}

impl Scope {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Scope::All => "all",
			Scope::ContentType => "content_type",
		}
	}
}

/// Persisted duplicate-detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DupecheckConfig {
	/// Identifier of the provider variant to search with.
	pub search_mode: String,
	pub search_mode_config: SearchModeConfig,
	pub scope: Scope,
	/// Maximum number of candidates shown per query.
	pub results_max: usize,
	/// Minimum characters typed before a query is issued.
	pub query_min: usize,
	/// Minimum word length indexed by the full-text subsystem.
	pub minimum_word_size: usize,
	/// Keep adding results instead of replacing them.
	pub results_prepend: bool,
	pub searching_string: String,
	pub no_result_string: String,
	pub default_description: String,
	/// Base address of the query endpoint handed to clients.
	pub endpoint_url: String,
}

impl Default for DupecheckConfig {
	fn default() -> Self {
		Self {
			search_mode: "title".into(),
			search_mode_config: SearchModeConfig::default(),
			scope: Scope::default(),
			results_max: 10,
			query_min: 3,
			minimum_word_size: 3,
			results_prepend: false,
			searching_string: "Searching…".into(),
			no_result_string: "No related content found.".into(),
			default_description: "Help us avoid duplicates: similar content already on the site is listed here.".into(),
			endpoint_url: "http://localhost/dupecheck/search".into(),
		}
	}
}

/// Invalid values in a [`DupecheckConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("results_max must be a positive integer")]
	ZeroResultsMax,
	#[error("query_min must be a positive integer")]
	ZeroQueryMin,
	#[error("search_mode must not be empty")]
	EmptySearchMode,
}

impl DupecheckConfig {
	/// Check the invariants configuration screens would enforce.
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.results_max == 0 {
			return Err(ConfigValidationError::ZeroResultsMax);
		}
		if self.query_min == 0 {
			return Err(ConfigValidationError::ZeroQueryMin);
		}
		if self.search_mode.trim().is_empty() {
			return Err(ConfigValidationError::EmptySearchMode);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert_eq!(DupecheckConfig::default().validate(), Ok(()));
	}

	#[test]
	fn zero_limits_are_rejected() {
		let config = DupecheckConfig {
			results_max: 0,
			..DupecheckConfig::default()
		};
		assert_eq!(config.validate(), Err(ConfigValidationError::ZeroResultsMax));

		let config = DupecheckConfig {
			query_min: 0,
			..DupecheckConfig::default()
		};
		assert_eq!(config.validate(), Err(ConfigValidationError::ZeroQueryMin));
	}

	#[test]
	fn partial_documents_fill_defaults() {
		let config: DupecheckConfig =
			serde_json::from_str(r#"{"search_mode":"search_page","scope":"all"}"#)
				.expect("deserialize");
		assert_eq!(config.search_mode, "search_page");
		assert_eq!(config.scope, Scope::All);
		assert_eq!(config.results_max, 10);
	}
}
