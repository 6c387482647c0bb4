use crate::settings::SearchModeConfig;
use crate::sources::ContentSources;

/// Shared inputs provided to providers when they are asked to search.
///
/// Wrapping the shared state in a context struct keeps the provider trait
/// stable when more inputs are introduced later.
#[derive(Clone, Copy)]
pub struct ProviderContext<'a> {
	sources: &'a ContentSources,
	mode_config: &'a SearchModeConfig,
}

impl<'a> ProviderContext<'a> {
	/// Create a new context describing the current search invocation.
	#[must_use]
	pub fn new(sources: &'a ContentSources, mode_config: &'a SearchModeConfig) -> Self {
		Self {
			sources,
			mode_config,
		}
	}

	/// Access the data sources providers may query.
	#[must_use]
	pub fn sources(&self) -> &'a ContentSources {
		self.sources
	}

	/// Access the per-variant configuration.
	#[must_use]
	pub fn mode_config(&self) -> &'a SearchModeConfig {
		self.mode_config
	}
}
