//! Bridges the configured provider variant to a bounded, deduplicated result.

use std::collections::HashSet;
use std::sync::Arc;

use dupecheck_provider_api::{
	Candidate, ContentSources, ProviderContext, ProviderRegistry, QueryValues, SearchOptions,
};
use tracing::{debug, warn};

use crate::config::DupecheckConfig;

/// Extra rows requested beyond the display maximum so overflow can be observed
/// even after duplicates are dropped.
const OVERFLOW_PROBE: usize = 2;

/// Candidates accepted for one query, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationResult {
	pub candidates: Vec<Candidate>,
	/// More distinct candidates existed than the configured maximum.
	pub has_more: bool,
}

impl AggregationResult {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}
}

/// Drives one provider variant selected by configuration.
#[derive(Clone)]
pub struct ResultAggregator {
	registry: Arc<ProviderRegistry>,
	sources: Arc<ContentSources>,
	config: Arc<DupecheckConfig>,
}

impl ResultAggregator {
	pub fn new(
		registry: Arc<ProviderRegistry>,
		sources: Arc<ContentSources>,
		config: Arc<DupecheckConfig>,
	) -> Self {
		Self {
			registry,
			sources,
			config,
		}
	}

	#[must_use]
	pub fn config(&self) -> &DupecheckConfig {
		&self.config
	}

	/// Search with the display maximum applied.
	pub fn aggregate(&self, values: &QueryValues) -> AggregationResult {
		self.search(values, true)
	}

	/// All distinct candidates for `values` and how many there are.
	///
	/// Used to fill the widget when an existing item is opened for editing.
	pub fn initial_content(&self, values: &QueryValues) -> (Vec<Candidate>, usize) {
		let result = self.search(values, false);
		let count = result.candidates.len();
		(result.candidates, count)
	}

	/// Resolve the provider, run it once and fold its output.
	///
	/// Every failure is logged and degrades to an empty result.
	pub fn search(&self, values: &QueryValues, limit_results: bool) -> AggregationResult {
		if !values.is_searchable() {
			return AggregationResult::default();
		}

		let mode_id = self.config.search_mode.as_str();
		let Some(provider) = self.registry.resolve(mode_id) else {
			warn!(mode = mode_id, "search mode is unknown or unavailable");
			return AggregationResult::default();
		};

		let max = self.config.results_max;
		let options = if limit_results {
			SearchOptions::limited(max.saturating_add(OVERFLOW_PROBE))
		} else {
			SearchOptions::default()
		};
		let context = ProviderContext::new(&self.sources, &self.config.search_mode_config);
		let found = match provider.search(values, &options, context) {
			Ok(found) => found,
			Err(error) => {
				warn!(mode = mode_id, %error, "provider search failed");
				return AggregationResult::default();
			}
		};

		let mut seen = HashSet::new();
		let mut result = AggregationResult::default();
		for candidate in found {
			if !seen.insert(candidate.key.clone()) {
				continue;
			}
			if limit_results && seen.len() > max {
				result.has_more = true;
				break;
			}
			result.candidates.push(candidate);
		}
		debug!(
			mode = mode_id,
			count = result.candidates.len(),
			has_more = result.has_more,
			"aggregated candidates"
		);
		result
	}
}
