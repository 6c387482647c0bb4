//! Response records exchanged between the endpoint and the client.

use dupecheck_provider_api::{Candidate, EntityKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Row key of the overflow record.
pub const MORE_KEY: &str = "more";

/// One serialized candidate, or the overflow sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
	#[serde(default)]
	pub title: String,
	/// `1` when the item is published, `0` otherwise.
	#[serde(default)]
	pub status: u8,
	#[serde(default)]
	pub href: String,
	#[serde(default)]
	pub more: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entity_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bundle: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub entity_id: Option<String>,
}

impl WireRecord {
	/// The trailing record signalling that results were cut off.
	#[must_use]
	pub fn sentinel() -> Self {
		Self {
			more: true,
			..Self::default()
		}
	}

	#[must_use]
	pub fn is_published(&self) -> bool {
		self.status != 0
	}

	/// Composite identity of the record, when it carries one.
	#[must_use]
	pub fn cache_key(&self) -> Option<String> {
		let entity_type = self.entity_type.as_deref()?;
		let entity_id = self.entity_id.as_deref()?;
		Some(EntityKey::new(entity_type, self.bundle.as_deref(), entity_id).cache_key())
	}
}

impl From<&Candidate> for WireRecord {
	fn from(candidate: &Candidate) -> Self {
		Self {
			title: candidate.title.clone(),
			status: u8::from(candidate.published),
			href: candidate.href.clone(),
			more: false,
			entity_type: Some(candidate.key.entity_type.clone()),
			bundle: candidate.key.bundle.clone(),
			entity_id: Some(candidate.key.id.clone()),
		}
	}
}

/// Ordered records keyed by an opaque row id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResponse {
	records: IndexMap<String, WireRecord>,
}

impl QueryResponse {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, key: impl Into<String>, record: WireRecord) {
		self.records.insert(key.into(), record);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Whether the final record is the overflow sentinel.
	#[must_use]
	pub fn has_more(&self) -> bool {
		self.records.last().is_some_and(|(_, record)| record.more)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &WireRecord)> {
		self.records.iter().map(|(key, record)| (key.as_str(), record))
	}

	pub fn records(&self) -> impl Iterator<Item = &WireRecord> {
		self.records.values()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn records_use_camel_case_and_skip_missing_identity() {
		let record = WireRecord::from(&Candidate::new(
			EntityKey::new("node", Some("article"), "7"),
			"Cat care",
			"/node/7",
			false,
		));
		let value = serde_json::to_value(&record).expect("serialize");
		assert_eq!(
			value,
			serde_json::json!({
				"title": "Cat care",
				"status": 0,
				"href": "/node/7",
				"more": false,
				"entityType": "node",
				"bundle": "article",
				"entityId": "7",
			})
		);

		let sentinel = serde_json::to_value(WireRecord::sentinel()).expect("serialize");
		assert_eq!(
			sentinel,
			serde_json::json!({"title": "", "status": 0, "href": "", "more": true})
		);
	}

	#[test]
	fn response_preserves_row_order() {
		let mut response = QueryResponse::new();
		response.push("node--9", WireRecord::default());
		response.push("node--2", WireRecord::default());
		response.push(MORE_KEY, WireRecord::sentinel());
		let json = serde_json::to_string(&response).expect("serialize");
		let decoded: QueryResponse = serde_json::from_str(&json).expect("deserialize");
		let keys: Vec<&str> = decoded.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["node--9", "node--2", "more"]);
		assert!(decoded.has_more());
	}

	#[test]
	fn cache_key_needs_type_and_id() {
		assert_eq!(WireRecord::sentinel().cache_key(), None);
		let record = WireRecord {
			entity_type: Some("node".into()),
			entity_id: Some("3".into()),
			..WireRecord::default()
		};
		assert_eq!(record.cache_key().as_deref(), Some("node--3"));
	}
}
