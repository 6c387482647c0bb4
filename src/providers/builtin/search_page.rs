use dupecheck_provider_api::{
	Candidate, PageHit, ProviderContext, ProviderDescriptor, ProviderError, QueryValues,
	SearchMode, SearchModeConfig, SearchOptions, SearchProvider, SettingsField, SettingsOption,
	SubmittedSettings,
};
use tracing::{debug, warn};

use super::{fulltext_keys, within_scope};

pub const PROVIDER_ID: &str = "search_page";
pub const SETTING_KEY: &str = "search_page";

pub static SEARCH_PAGE_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
	id: PROVIDER_ID,
	label: "Full-text search page",
	available: search_page_available,
};

fn search_page_available() -> bool {
	cfg!(feature = "search-page")
}

pub fn mode() -> SearchMode {
	SearchMode::from_descriptor(&SEARCH_PAGE_DESCRIPTOR)
}

/// Runs the configured full-text search page and keeps the content hits.
pub struct SearchPageProvider;

impl SearchProvider for SearchPageProvider {
	fn descriptor(&self) -> &'static ProviderDescriptor {
		&SEARCH_PAGE_DESCRIPTOR
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
		let Some(page_id) = context.mode_config().search_page.as_deref() else {
			debug!("no search page configured");
			return Ok(Vec::new());
		};
		let page = context
			.sources()
			.page(page_id)
			.ok_or_else(|| ProviderError::MissingSearchPage {
				id: page_id.to_string(),
			})?;

		let limit = options.limit.unwrap_or(usize::MAX);
		let mut output = Vec::new();
		for hit in page.execute(&keys)? {
			match hit {
				PageHit::Entity(candidate) => {
					if within_scope(&candidate, values) {
						output.push(candidate);
					}
				}
				PageHit::Other { title } => {
					warn!(
						page = page_id,
						row = %title,
						"search page did not return a content entity; skipping row"
					);
				}
			}
			if output.len() >= limit {
				break;
			}
		}
		Ok(output)
	}

	fn settings_form(&self, context: ProviderContext<'_>) -> Vec<SettingsField> {
		let options = context
			.sources()
			.pages()
			.map(|(id, page)| SettingsOption::new(id, page.label()))
			.collect();
		vec![SettingsField {
			key: SETTING_KEY,
			label: "Search page",
			options,
			current: context.mode_config().search_page.clone(),
			required: true,
		}]
	}

	fn submit_settings_form(&self, config: &mut SearchModeConfig, submitted: &SubmittedSettings) {
		config.search_page = submitted
			.get(SETTING_KEY)
			.filter(|value| !value.is_empty())
			.cloned();
		config.search_api_index = None;
	}
}
