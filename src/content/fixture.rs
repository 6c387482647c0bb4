use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dupecheck_provider_api::{Candidate, ContentSources, EntityKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::memory::{MemoryIndex, MemoryPage, MemoryStore};

/// A stored content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
	pub id: String,
	pub entity_type: String,
	#[serde(default)]
	pub bundle: Option<String>,
	pub title: String,
	pub url: String,
	#[serde(default = "published_by_default")]
	pub published: bool,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub body: String,
}

fn published_by_default() -> bool {
	true
}

impl ContentItem {
	#[must_use]
	pub fn key(&self) -> EntityKey {
		EntityKey::new(self.entity_type.clone(), self.bundle.clone(), self.id.clone())
	}

	#[must_use]
	pub fn to_candidate(&self) -> Candidate {
		Candidate::new(self.key(), self.title.clone(), self.url.clone(), self.published)
	}

	#[must_use]
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|own| own.eq_ignore_ascii_case(tag))
	}
}

/// What a search page returns rows for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
	/// Rows resolve to content entities.
	#[default]
	Content,
	/// Rows describe something else, such as user accounts.
	Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefinition {
	pub id: String,
	pub label: String,
	#[serde(default)]
	pub kind: PageKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDefinition {
	pub id: String,
	pub label: String,
}

/// JSON document describing the content and search backends to serve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFixture {
	pub items: Vec<ContentItem>,
	pub search_pages: Vec<PageDefinition>,
	pub search_indexes: Vec<IndexDefinition>,
}

#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("failed to read content fixture {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse content fixture {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl ContentFixture {
	/// Load a fixture from a JSON file.
	pub fn load(path: &Path) -> Result<Self, FixtureError> {
		let raw = fs::read_to_string(path).map_err(|source| FixtureError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Build the provider data sources described by this fixture.
	#[must_use]
	pub fn into_sources(self) -> ContentSources {
		let store = MemoryStore::new(self.items);
		let mut sources = ContentSources::new().with_store(Arc::new(store.clone()));
		for page in self.search_pages {
			let memory = MemoryPage::new(page.label, page.kind, store.clone());
			sources = sources.with_page(page.id, Arc::new(memory));
		}
		for index in self.search_indexes {
			let memory = MemoryIndex::new(index.label, store.clone());
			sources = sources.with_index(index.id, Arc::new(memory));
		}
		sources
	}
}
