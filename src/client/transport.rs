use tracing::warn;
use url::Url;

use crate::endpoint::{QueryEndpoint, QueryResponse};

/// Delivers a query URL to an endpoint and returns its decoded answer.
///
/// `None` means the request failed; callers treat it like an empty answer.
pub trait QueryTransport: Send + Sync {
	fn fetch(&self, url: &str) -> Option<QueryResponse>;
}

/// Serves requests from an endpoint running in the same process.
#[derive(Clone)]
pub struct LocalTransport {
	endpoint: QueryEndpoint,
}

impl LocalTransport {
	pub fn new(endpoint: QueryEndpoint) -> Self {
		Self { endpoint }
	}
}

impl QueryTransport for LocalTransport {
	fn fetch(&self, url: &str) -> Option<QueryResponse> {
		let parsed = match Url::parse(url) {
			Ok(parsed) => parsed,
			Err(error) => {
				warn!(%url, %error, "invalid query address");
				return None;
			}
		};
		Some(self.endpoint.handle_query(parsed.query().unwrap_or_default()))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::aggregate::ResultAggregator;
	use crate::config::DupecheckConfig;
	use crate::providers::builtin::test_support;
	use crate::providers::builtin_registry;

	fn transport() -> LocalTransport {
		LocalTransport::new(QueryEndpoint::new(ResultAggregator::new(
			Arc::new(builtin_registry().expect("registry")),
			Arc::new(test_support::sources()),
			Arc::new(DupecheckConfig::default()),
		)))
	}

	#[test]
	fn dispatches_query_string_to_endpoint() {
		let response = transport()
			.fetch("http://localhost/dupecheck/search?title=cat&entity_id=1&bundle=article")
			.expect("response");
		let keys: Vec<&str> = response.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["node--article--4"]);
	}

	#[test]
	fn malformed_addresses_fail() {
		assert_eq!(transport().fetch("not a url"), None);
		assert_eq!(
			transport().fetch("http://localhost/dupecheck/search"),
			Some(QueryResponse::new())
		);
	}
}
