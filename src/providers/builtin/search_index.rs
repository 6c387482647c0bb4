use dupecheck_provider_api::{
	Candidate, ProviderContext, ProviderDescriptor, ProviderError, QueryValues, SearchMode,
	SearchModeConfig, SearchOptions, SearchProvider, SettingsField, SettingsOption,
	SubmittedSettings,
};
use tracing::debug;

use super::{fulltext_keys, within_scope};

pub const PROVIDER_ID: &str = "search_api_index";
pub const SETTING_KEY: &str = "search_api_index";

pub static SEARCH_INDEX_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
	id: PROVIDER_ID,
	label: "Search index",
	available: search_index_available,
};

fn search_index_available() -> bool {
	cfg!(feature = "search-index")
}

pub fn mode() -> SearchMode {
	SearchMode::from_descriptor(&SEARCH_INDEX_DESCRIPTOR)
}

/// Queries the configured search index.
pub struct SearchIndexProvider;

impl SearchProvider for SearchIndexProvider {
	fn descriptor(&self) -> &'static ProviderDescriptor {
		&SEARCH_INDEX_DESCRIPTOR
	}

	fn search(
		&self,
		values: &QueryValues,
		options: &SearchOptions,
		context: ProviderContext<'_>,
	) -> Result<Vec<Candidate>, ProviderError> {
		let Some(keys) = fulltext_keys(values) else {
			return Ok(Vec::new());
		};
		let Some(index_id) = context.mode_config().search_api_index.as_deref() else {
			debug!("no search index configured");
			return Ok(Vec::new());
		};
		let index = context
			.sources()
			.index(index_id)
			.ok_or_else(|| ProviderError::MissingIndex {
				id: index_id.to_string(),
			})?;

		let limit = options.limit.unwrap_or(usize::MAX);
		Ok(index
			.query(&keys, limit)?
			.into_iter()
			.filter(|candidate| within_scope(candidate, values))
			.collect())
	}

	fn settings_form(&self, context: ProviderContext<'_>) -> Vec<SettingsField> {
		let options = context
			.sources()
			.indexes()
			.map(|(id, index)| SettingsOption::new(id, index.label()))
			.collect();
		vec![SettingsField {
			key: SETTING_KEY,
			label: "Search index",
			options,
			current: context.mode_config().search_api_index.clone(),
			required: true,
		}]
	}

	fn submit_settings_form(&self, config: &mut SearchModeConfig, submitted: &SubmittedSettings) {
		config.search_page = None;
		config.search_api_index = submitted
			.get(SETTING_KEY)
			.filter(|value| !value.is_empty())
			.cloned();
	}
}
