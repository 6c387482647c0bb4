use serde::{Deserialize, Serialize};

use crate::config::{DupecheckConfig, Scope};
use crate::providers::builtin::search_page;

/// Read-only settings handed to one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
	/// Endpoint address queries are sent to.
	#[serde(rename = "URL")]
	pub url: String,
	pub prepend_results: bool,
	pub min_characters: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entity_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entity_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bundle: Option<String>,
	pub searching_string: String,
	pub no_results_string: String,
}

impl ClientSettings {
	/// Build the payload for a form editing an item of `entity_type`/`bundle`.
	///
	/// `entity_id` is only given when an existing item is being edited.
	#[must_use]
	pub fn for_form(
		config: &DupecheckConfig,
		entity_type: Option<&str>,
		bundle: Option<&str>,
		entity_id: Option<&str>,
	) -> Self {
		let mut min_characters = config.query_min;
		if config.search_mode == search_page::PROVIDER_ID {
			min_characters = min_characters.max(config.minimum_word_size);
		}
		let scoped = config.scope == Scope::ContentType;
		Self {
			url: config.endpoint_url.clone(),
			prepend_results: config.results_prepend,
			min_characters,
			entity_id: entity_id.map(str::to_string),
			entity_type: entity_type.filter(|_| scoped).map(str::to_string),
			bundle: bundle.filter(|_| scoped).map(str::to_string),
			searching_string: config.searching_string.clone(),
			no_results_string: config.no_result_string.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn payload_uses_wire_field_names() {
		let settings = ClientSettings::for_form(
			&DupecheckConfig::default(),
			Some("node"),
			Some("article"),
			None,
		);
		let value = serde_json::to_value(&settings).expect("serialize");
		assert_eq!(
			value,
			serde_json::json!({
				"URL": "http://localhost/dupecheck/search",
				"prependResults": false,
				"minCharacters": 3,
				"entityType": "node",
				"bundle": "article",
				"searchingString": "Searching…",
				"noResultsString": "No related content found.",
			})
		);
	}

	#[test]
	fn unrestricted_scope_drops_type_and_bundle() {
		let config = DupecheckConfig {
			scope: Scope::All,
			..DupecheckConfig::default()
		};
		let settings = ClientSettings::for_form(&config, Some("node"), Some("page"), Some("8"));
		assert_eq!(settings.entity_type, None);
		assert_eq!(settings.bundle, None);
		assert_eq!(settings.entity_id.as_deref(), Some("8"));
	}

	#[test]
	fn search_page_mode_respects_indexed_word_size() {
		let config = DupecheckConfig {
			search_mode: "search_page".into(),
			query_min: 2,
			minimum_word_size: 4,
			..DupecheckConfig::default()
		};
		assert_eq!(
			ClientSettings::for_form(&config, None, None, None).min_characters,
			4
		);

		let config = DupecheckConfig {
			query_min: 2,
			minimum_word_size: 4,
			..DupecheckConfig::default()
		};
		assert_eq!(
			ClientSettings::for_form(&config, None, None, None).min_characters,
			2
		);
	}
}
