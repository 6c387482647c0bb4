use std::sync::Arc;

use dupecheck_provider_api::{
	Candidate, ContentStore, EntityQuery, PageHit, SearchIndex, SearchPage, SourceError,
};

use super::fixture::{ContentItem, PageKind};

/// Content store backed by a vector, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	items: Arc<Vec<ContentItem>>,
}

impl MemoryStore {
	#[must_use]
	pub fn new(items: Vec<ContentItem>) -> Self {
		Self {
			items: Arc::new(items),
		}
	}

	#[must_use]
	pub fn items(&self) -> &[ContentItem] {
		&self.items
	}
}

impl ContentStore for MemoryStore {
	fn query(&self, query: &EntityQuery) -> Result<Vec<Candidate>, SourceError> {
		let needle = query.title_contains.as_deref().map(str::to_lowercase);
		let limit = query.limit.unwrap_or(usize::MAX);
		Ok(self
			.items
			.iter()
			.filter(|item| {
				let by_title = needle
					.as_deref()
					.is_some_and(|needle| item.title.to_lowercase().contains(needle));
				let by_tags = query
					.any_tags
					.iter()
					.any(|tag| item.has_tag(tag));
				by_title || by_tags
			})
			.filter(|item| {
				query
					.entity_type
					.as_deref()
					.is_none_or(|entity_type| item.entity_type == entity_type)
			})
			.filter(|item| {
				query
					.bundle
					.as_deref()
					.is_none_or(|bundle| item.bundle.as_deref() == Some(bundle))
			})
			.filter(|item| query.exclude_id.as_deref() != Some(item.id.as_str()))
			.take(limit)
			.map(ContentItem::to_candidate)
			.collect())
	}
}

fn keywords(text: &str) -> Vec<String> {
	text.split(|ch: char| !ch.is_alphanumeric())
		.filter(|word| !word.is_empty())
		.map(str::to_lowercase)
		.collect()
}

/// Rank items by how many of the query keywords they contain.
///
/// Ties keep storage order so results stay stable across calls.
fn keyword_matches<'a>(items: &'a [ContentItem], keys: &str) -> Vec<&'a ContentItem> {
	let wanted = keywords(keys);
	if wanted.is_empty() {
		return Vec::new();
	}
	let mut scored: Vec<(usize, usize, &ContentItem)> = items
		.iter()
		.enumerate()
		.filter_map(|(position, item)| {
			let mut haystack = keywords(&item.title);
			haystack.extend(keywords(&item.body));
			haystack.extend(item.tags.iter().flat_map(|tag| keywords(tag)));
			let score = wanted
				.iter()
				.filter(|word| haystack.contains(word))
				.count();
			(score > 0).then_some((score, position, item))
		})
		.collect();
	scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
	scored.into_iter().map(|(_, _, item)| item).collect()
}

/// Keyword search page over a fixed set of items.
#[derive(Debug, Clone)]
pub struct MemoryPage {
	label: String,
	kind: PageKind,
	store: MemoryStore,
}

impl MemoryPage {
	pub fn new(label: impl Into<String>, kind: PageKind, store: MemoryStore) -> Self {
		Self {
			label: label.into(),
			kind,
			store,
		}
	}
}

impl SearchPage for MemoryPage {
	fn label(&self) -> &str {
		&self.label
	}

	fn execute(&self, keys: &str) -> Result<Vec<PageHit>, SourceError> {
		Ok(keyword_matches(self.store.items(), keys)
			.into_iter()
			.map(|item| match self.kind {
				PageKind::Content => PageHit::Entity(item.to_candidate()),
				PageKind::Other => PageHit::Other {
					title: item.title.clone(),
				},
			})
			.collect())
	}
}

/// Keyword index over a fixed set of items.
#[derive(Debug, Clone)]
pub struct MemoryIndex {
	label: String,
	store: MemoryStore,
}

impl MemoryIndex {
	pub fn new(label: impl Into<String>, store: MemoryStore) -> Self {
		Self {
			label: label.into(),
			store,
		}
	}
}

impl SearchIndex for MemoryIndex {
	fn label(&self) -> &str {
		&self.label
	}

	fn query(&self, keys: &str, limit: usize) -> Result<Vec<Candidate>, SourceError> {
		Ok(keyword_matches(self.store.items(), keys)
			.into_iter()
			.take(limit)
			.map(ContentItem::to_candidate)
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, bundle: &str, title: &str) -> ContentItem {
		ContentItem {
			id: id.into(),
			entity_type: "node".into(),
			bundle: Some(bundle.into()),
			title: title.into(),
			url: format!("/node/{id}"),
			published: true,
			tags: Vec::new(),
			body: String::new(),
		}
	}

	fn store() -> MemoryStore {
		MemoryStore::new(vec![
			item("1", "article", "Cat care basics"),
			item("2", "page", "All about cats"),
			item("3", "article", "Dog walking"),
			item("4", "article", "Caring for a CAT"),
		])
	}

	fn ids(candidates: &[Candidate]) -> Vec<&str> {
		candidates.iter().map(|c| c.key.id.as_str()).collect()
	}

	#[test]
	fn title_query_is_case_insensitive_and_ordered() {
		let query = EntityQuery {
			title_contains: Some("cat".into()),
			..EntityQuery::default()
		};
		let found = store().query(&query).expect("query");
		assert_eq!(ids(&found), vec!["1", "2", "4"]);
	}

	#[test]
	fn title_query_applies_filters_and_range() {
		let query = EntityQuery {
			title_contains: Some("cat".into()),
			bundle: Some("article".into()),
			exclude_id: Some("1".into()),
			limit: Some(5),
			..EntityQuery::default()
		};
		let found = store().query(&query).expect("query");
		assert_eq!(ids(&found), vec!["4"]);

		let query = EntityQuery {
			title_contains: Some("a".into()),
			limit: Some(2),
			..EntityQuery::default()
		};
		assert_eq!(store().query(&query).expect("query").len(), 2);
	}

	#[test]
	fn index_ranks_by_keyword_overlap() {
		let index = MemoryIndex::new("Content", store());
		let found = index.query("caring cat", 10).expect("query");
		assert_eq!(ids(&found), vec!["4", "1"]);
	}

	#[test]
	fn non_content_pages_yield_other_hits() {
		let page = MemoryPage::new("Users", PageKind::Other, store());
		let hits = page.execute("dog").expect("execute");
		assert_eq!(
			hits,
			vec![PageHit::Other {
				title: "Dog walking".into()
			}]
		);
	}
}
