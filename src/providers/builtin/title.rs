use dupecheck_provider_api::{
	Candidate, EntityQuery, ProviderContext, ProviderDescriptor, ProviderError, QueryValues,
	SearchMode, SearchOptions, SearchProvider, descriptors::always_available,
};

pub const PROVIDER_ID: &str = "title";

pub static TITLE_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
	id: PROVIDER_ID,
	label: "Simple title substring match",
	available: always_available,
};

pub fn mode() -> SearchMode {
	SearchMode::from_descriptor(&TITLE_DESCRIPTOR)
}

/// Matches titles containing the typed text directly against the content store.
///
/// Tags, when given, widen the match to items carrying any of them.
pub struct TitleProvider;

impl SearchProvider for TitleProvider {
	fn descriptor(&self) -> &'static ProviderDescriptor {
		&TITLE_DESCRIPTOR
	}

	fn search(
		&self,
		values: &QueryValues,
		options: &SearchOptions,
		context: ProviderContext<'_>,
	) -> Result<Vec<Candidate>, ProviderError> {
		let any_tags = values.tag_list();
		if values.title.is_none() && any_tags.is_empty() {
			return Ok(Vec::new());
		}

		let store = context
			.sources()
			.store()
			.ok_or(ProviderError::MissingStore)?;
		let query = EntityQuery {
			title_contains: values.title.clone(),
			any_tags,
			entity_type: values.entity_type.clone(),
			bundle: values.bundle.clone(),
			exclude_id: values.entity_id.clone(),
			limit: options.limit,
		};
		Ok(store.query(&query)?)
	}
}

#[cfg(test)]
mod tests {
	use dupecheck_provider_api::{Facet, SearchModeConfig};

	use super::*;
	use crate::providers::builtin::test_support::{ids, sources};

	fn run(values: &QueryValues, options: SearchOptions) -> Vec<Candidate> {
		let sources = sources();
		let config = SearchModeConfig::default();
		TitleProvider
			.search(values, &options, ProviderContext::new(&sources, &config))
			.expect("search")
	}

	#[test]
	fn empty_title_returns_nothing() {
		let values = QueryValues::new().with(Facet::Bundle, "article");
		assert!(run(&values, SearchOptions::default()).is_empty());
	}

	#[test]
	fn excludes_item_being_edited() {
		let values = QueryValues::new()
			.with(Facet::Title, "cat")
			.with(Facet::EntityId, "1");
		assert_eq!(ids(&run(&values, SearchOptions::default())), vec!["2", "4"]);
	}

	#[test]
	fn honors_bundle_scope_and_limit() {
		let values = QueryValues::new()
			.with(Facet::Title, "cat")
			.with(Facet::Bundle, "article");
		assert_eq!(ids(&run(&values, SearchOptions::default())), vec!["1", "4"]);
		assert_eq!(ids(&run(&values, SearchOptions::limited(1))), vec!["1"]);
	}

	#[test]
	fn tags_match_tagged_items() {
		let values = QueryValues::new().with(Facet::Tags, "cats, birds");
		assert_eq!(ids(&run(&values, SearchOptions::default())), vec!["5"]);
	}

	#[test]
	fn missing_store_is_reported() {
		let sources = dupecheck_provider_api::ContentSources::new();
		let config = SearchModeConfig::default();
		let values = QueryValues::new().with(Facet::Title, "cat");
		let error = TitleProvider
			.search(
				&values,
				&SearchOptions::default(),
				ProviderContext::new(&sources, &config),
			)
			.expect_err("store missing");
		assert_eq!(error, ProviderError::MissingStore);
	}
}
