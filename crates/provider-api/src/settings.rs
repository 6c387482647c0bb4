use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variant-specific configuration persisted next to the selected search mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchModeConfig {
	/// Identifier of the full-text search page used by the `search_page` variant.
	pub search_page: Option<String>,
	/// Identifier of the search index used by the `search_api_index` variant.
	pub search_api_index: Option<String>,
}

impl SearchModeConfig {
	/// Reset every variant-specific setting.
	pub fn clear(&mut self) {
		self.search_page = None;
		self.search_api_index = None;
	}
}

/// A single selectable value within a [`SettingsField`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsOption {
	pub value: String,
	pub label: String,
}

impl SettingsOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Description of a configuration input contributed by a provider variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsField {
	pub key: &'static str,
	pub label: &'static str,
	pub options: Vec<SettingsOption>,
	pub current: Option<String>,
	pub required: bool,
}

/// Values submitted from a configuration screen, keyed by field key.
pub type SubmittedSettings = IndexMap<String, String>;
