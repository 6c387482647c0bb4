//! Data sources providers search against.
//!
//! Entity storage, full-text search pages and search indexes are external
//! collaborators. Providers only see them through these traits.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::SourceError;
use crate::types::Candidate;

/// Conditions for a direct content store lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityQuery {
	/// Case-insensitive substring the title must contain.
	pub title_contains: Option<String>,
	/// Match items carrying any of these tags.
	pub any_tags: Vec<String>,
	pub entity_type: Option<String>,
	pub bundle: Option<String>,
	/// Identifier that must not appear in the results.
	pub exclude_id: Option<String>,
	/// Maximum number of rows to return.
	pub limit: Option<usize>,
}

/// Queryable collection of content entities.
pub trait ContentStore: Send + Sync {
	/// Run `query`, returning matches in storage order.
	fn query(&self, query: &EntityQuery) -> Result<Vec<Candidate>, SourceError>;
}

/// A single row produced by a full-text search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageHit {
	/// The row resolves to a content entity.
	Entity(Candidate),
	/// The page searches something other than content entities.
	Other { title: String },
}

/// A full-text search page such as a site-wide keyword search.
pub trait SearchPage: Send + Sync {
	fn label(&self) -> &str;

	/// Execute the page with `keys`, returning hits in relevance order.
	fn execute(&self, keys: &str) -> Result<Vec<PageHit>, SourceError>;
}

/// A search index abstraction with ranged keyword queries.
pub trait SearchIndex: Send + Sync {
	fn label(&self) -> &str;

	/// Query the index, returning at most `limit` rows in relevance order.
	fn query(&self, keys: &str, limit: usize) -> Result<Vec<Candidate>, SourceError>;
}

/// Every data source available to providers.
#[derive(Clone, Default)]
pub struct ContentSources {
	store: Option<Arc<dyn ContentStore>>,
	pages: IndexMap<String, Arc<dyn SearchPage>>,
	indexes: IndexMap<String, Arc<dyn SearchIndex>>,
}

impl ContentSources {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_store(mut self, store: Arc<dyn ContentStore>) -> Self {
		self.store = Some(store);
		self
	}

	#[must_use]
	pub fn with_page(mut self, id: impl Into<String>, page: Arc<dyn SearchPage>) -> Self {
		self.pages.insert(id.into(), page);
		self
	}

	#[must_use]
	pub fn with_index(mut self, id: impl Into<String>, index: Arc<dyn SearchIndex>) -> Self {
		self.indexes.insert(id.into(), index);
		self
	}

	#[must_use]
	pub fn store(&self) -> Option<&Arc<dyn ContentStore>> {
		self.store.as_ref()
	}

	#[must_use]
	pub fn page(&self, id: &str) -> Option<&Arc<dyn SearchPage>> {
		self.pages.get(id)
	}

	pub fn pages(&self) -> impl Iterator<Item = (&str, &Arc<dyn SearchPage>)> {
		self.pages.iter().map(|(id, page)| (id.as_str(), page))
	}

	#[must_use]
	pub fn index(&self, id: &str) -> Option<&Arc<dyn SearchIndex>> {
		self.indexes.get(id)
	}

	pub fn indexes(&self) -> impl Iterator<Item = (&str, &Arc<dyn SearchIndex>)> {
		self.indexes.iter().map(|(id, index)| (id.as_str(), index))
	}
}
