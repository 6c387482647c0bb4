use std::collections::HashSet;

use crate::endpoint::WireRecord;

/// Query strings that already produced results.
///
/// Consulted only in cumulative mode, where re-running such a query could
/// never add anything new. Entries are never evicted.
#[derive(Debug, Default)]
pub struct QueryCache {
	strings: HashSet<String>,
}

impl QueryCache {
	pub fn record(&mut self, query: &str) {
		self.strings.insert(query.to_string());
	}

	#[must_use]
	pub fn contains(&self, query: &str) -> bool {
		self.strings.contains(query)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.strings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.strings.is_empty()
	}
}

/// Composite keys of every record already shown in cumulative mode.
#[derive(Debug, Default)]
pub struct ItemCache {
	keys: HashSet<String>,
}

impl ItemCache {
	/// Key a record by type, bundle and id, falling back to its link.
	#[must_use]
	pub fn key_for(record: &WireRecord) -> String {
		record.cache_key().unwrap_or_else(|| record.href.clone())
	}

	/// Remember `key`, returning `true` when it was not seen before.
	pub fn insert(&mut self, key: &str) -> bool {
		if self.keys.contains(key) {
			return false;
		}
		self.keys.insert(key.to_string())
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}
