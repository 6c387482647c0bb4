//! Request/response boundary in front of the aggregator.

pub mod params;
pub mod wire;

pub use params::{encode_query, parse_query, strip_markup};
pub use wire::{MORE_KEY, QueryResponse, WireRecord};

use dupecheck_provider_api::QueryValues;
use tracing::debug;

use crate::aggregate::ResultAggregator;

/// Serves queries by running the aggregator and serializing its result.
///
/// The endpoint never fails: every error path below it already degrades to
/// an empty result.
#[derive(Clone)]
pub struct QueryEndpoint {
	aggregator: ResultAggregator,
}

impl QueryEndpoint {
	pub fn new(aggregator: ResultAggregator) -> Self {
		Self { aggregator }
	}

	#[must_use]
	pub fn aggregator(&self) -> &ResultAggregator {
		&self.aggregator
	}

	/// Handle a raw query string such as `title=cat&bundle=article`.
	#[must_use]
	pub fn handle_query(&self, query: &str) -> QueryResponse {
		self.handle(&parse_query(query))
	}

	/// Handle already-decoded values.
	///
	/// Values are sanitized again here so callers that bypass
	/// [`parse_query`] get the same treatment.
	#[must_use]
	pub fn handle(&self, values: &QueryValues) -> QueryResponse {
		let mut sanitized = QueryValues::new();
		for (facet, value) in values.iter() {
			sanitized.set(facet, strip_markup(value));
		}

		let result = self.aggregator.aggregate(&sanitized);
		let mut response = QueryResponse::new();
		for candidate in &result.candidates {
			response.push(candidate.key.cache_key(), WireRecord::from(candidate));
		}
		if result.has_more {
			response.push(MORE_KEY, WireRecord::sentinel());
		}
		debug!(records = response.len(), "query served");
		response
	}
}
