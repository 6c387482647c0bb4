use crate::{
	context::ProviderContext,
	descriptors::ProviderDescriptor,
	error::ProviderError,
	settings::{SearchModeConfig, SettingsField, SubmittedSettings},
	types::{Candidate, QueryValues, SearchMode, SearchOptions},
};

/// A pluggable search strategy that proposes duplicate candidates.
///
/// Implementations must:
/// - return an empty list, without touching their backend, when the facet they
///   search on is empty;
/// - never return the item named by [`QueryValues::entity_id`];
/// - honor [`QueryValues::bundle`] and [`QueryValues::entity_type`] as filters
///   when present;
/// - keep their backend's own ordering.
pub trait SearchProvider: Send + Sync {
	/// Static descriptor advertising provider metadata.
	fn descriptor(&self) -> &'static ProviderDescriptor;

	/// Identifier describing which variant this provider implements.
	fn mode(&self) -> SearchMode {
		SearchMode::from_descriptor(self.descriptor())
	}

	/// Whether the subsystem backing this variant is present.
	fn available(&self) -> bool {
		self.descriptor().is_available()
	}

	/// Search for candidates matching `values`.
	fn search(
		&self,
		values: &QueryValues,
		options: &SearchOptions,
		context: ProviderContext<'_>,
	) -> Result<Vec<Candidate>, ProviderError>;

	/// Configuration inputs shown beneath the search mode selector.
	fn settings_form(&self, _context: ProviderContext<'_>) -> Vec<SettingsField> {
		Vec::new()
	}

	/// Persist submitted configuration for this variant.
	///
	/// The default clears every variant-specific setting so that switching to
	/// a variant without settings leaves no stale references behind.
	fn submit_settings_form(&self, config: &mut SearchModeConfig, _submitted: &SubmittedSettings) {
		config.clear();
	}
}
