use serde::{Deserialize, Serialize};

/// Named facets a query may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
	Title,
	Tags,
	EntityId,
	EntityType,
	Bundle,
}

impl Facet {
	pub const ALL: [Facet; 5] = [
		Facet::Tags,
		Facet::Title,
		Facet::EntityId,
		Facet::EntityType,
		Facet::Bundle,
	];

	/// Parameter name used on the wire.
	#[must_use]
	pub const fn param(self) -> &'static str {
		match self {
			Facet::Title => "title",
			Facet::Tags => "tags",
			Facet::EntityId => "entity_id",
			Facet::EntityType => "entity_type",
			Facet::Bundle => "bundle",
		}
	}

	#[must_use]
	pub fn from_param(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|facet| facet.param() == name)
	}

	/// Whether the facet carries search text rather than scope.
	#[must_use]
	pub const fn is_searchable(self) -> bool {
		matches!(self, Facet::Title | Facet::Tags)
	}
}

/// Facet values for a single query. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryValues {
	pub title: Option<String>,
	pub tags: Option<String>,
	pub entity_id: Option<String>,
	pub entity_type: Option<String>,
	pub bundle: Option<String>,
}

impl QueryValues {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`set`](Self::set).
	#[must_use]
	pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
		self.set(facet, value);
		self
	}

	/// Store `value` for `facet`; empty values clear the facet instead.
	pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
		let value = value.into();
		let slot = self.slot_mut(facet);
		*slot = if value.is_empty() { None } else { Some(value) };
	}

	#[must_use]
	pub fn get(&self, facet: Facet) -> Option<&str> {
		match facet {
			Facet::Title => self.title.as_deref(),
			Facet::Tags => self.tags.as_deref(),
			Facet::EntityId => self.entity_id.as_deref(),
			Facet::EntityType => self.entity_type.as_deref(),
			Facet::Bundle => self.bundle.as_deref(),
		}
	}

	fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
		match facet {
			Facet::Title => &mut self.title,
			Facet::Tags => &mut self.tags,
			Facet::EntityId => &mut self.entity_id,
			Facet::EntityType => &mut self.entity_type,
			Facet::Bundle => &mut self.bundle,
		}
	}

	/// Returns `true` when no facet is set at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		Facet::ALL.into_iter().all(|facet| self.get(facet).is_none())
	}

	/// Returns `true` when at least one search facet is present.
	#[must_use]
	pub fn is_searchable(&self) -> bool {
		Facet::ALL
			.into_iter()
			.filter(|facet| facet.is_searchable())
			.any(|facet| self.get(facet).is_some())
	}

	/// Comma separated tags, trimmed, with blanks removed.
	#[must_use]
	pub fn tag_list(&self) -> Vec<String> {
		self.tags
			.as_deref()
			.unwrap_or_default()
			.split(',')
			.map(str::trim)
			.filter(|tag| !tag.is_empty())
			.map(str::to_string)
			.collect()
	}

	/// Iterate over the facets that carry a value, in wire order.
	pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
		Facet::ALL
			.into_iter()
			.filter_map(|facet| self.get(facet).map(|value| (facet, value)))
	}
}

/// Options the caller passes alongside a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
	/// Upper bound on rows a provider should fetch from its backend.
	pub limit: Option<usize>,
}

impl SearchOptions {
	#[must_use]
	pub fn limited(limit: usize) -> Self {
		Self { limit: Some(limit) }
	}
}
