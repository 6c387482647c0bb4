//! Flat key/value request parameters.

use std::sync::LazyLock;

use dupecheck_provider_api::{Facet, QueryValues};
use regex::Regex;
use url::form_urlencoded;

static MARKUP_TAG: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("markup tag regex"));

/// Remove anything that looks like a markup tag.
#[must_use]
pub fn strip_markup(value: &str) -> String {
	MARKUP_TAG.replace_all(value, "").into_owned()
}

/// Decode a query string into facet values.
///
/// Unknown keys are ignored and values that are empty after sanitizing are
/// omitted. When a key repeats, the last occurrence wins.
#[must_use]
pub fn parse_query(query: &str) -> QueryValues {
	let mut values = QueryValues::new();
	for (name, value) in form_urlencoded::parse(query.as_bytes()) {
		if let Some(facet) = Facet::from_param(&name) {
			values.set(facet, strip_markup(&value));
		}
	}
	values
}

/// Encode the facets that carry a value as a query string.
#[must_use]
pub fn encode_query(values: &QueryValues) -> String {
	let mut serializer = form_urlencoded::Serializer::new(String::new());
	for (facet, value) in values.iter() {
		serializer.append_pair(facet.param(), value);
	}
	serializer.finish()
}
