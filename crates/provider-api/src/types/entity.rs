use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a content item: its type, collection and instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityKey {
	pub entity_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bundle: Option<String>,
	pub id: String,
}

impl EntityKey {
	pub fn new(
		entity_type: impl Into<String>,
		bundle: Option<impl Into<String>>,
		id: impl Into<String>,
	) -> Self {
		Self {
			entity_type: entity_type.into(),
			bundle: bundle.map(Into::into),
			id: id.into(),
		}
	}

	/// Composite key joining the non-empty parts with `--`.
	#[must_use]
	pub fn cache_key(&self) -> String {
		[
			self.entity_type.as_str(),
			self.bundle.as_deref().unwrap_or_default(),
			self.id.as_str(),
		]
		.into_iter()
		.filter(|chunk| !chunk.is_empty())
		.collect::<Vec<_>>()
		.join("--")
	}
}

impl fmt::Display for EntityKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.cache_key())
	}
}

/// One content item returned as a possible duplicate.
///
/// Candidates are snapshots taken at query time and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
	pub key: EntityKey,
	pub title: String,
	pub href: String,
	pub published: bool,
}

impl Candidate {
	pub fn new(
		key: EntityKey,
		title: impl Into<String>,
		href: impl Into<String>,
		published: bool,
	) -> Self {
		Self {
			key,
			title: title.into(),
			href: href.into(),
			published,
		}
	}

	#[must_use]
	pub fn key(&self) -> &EntityKey {
		&self.key
	}

	/// Whether this candidate is the item identified by `entity_id`.
	#[must_use]
	pub fn is_entity(&self, entity_id: &str) -> bool {
		self.key.id == entity_id
	}
}
