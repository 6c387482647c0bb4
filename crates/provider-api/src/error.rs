use thiserror::Error;

use crate::types::SearchMode;

/// Errors that can occur when mutating the [`ProviderRegistry`](crate::ProviderRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderRegistryError {
	/// A provider attempted to register an identifier that already exists in the registry.
	#[error("provider id '{id}' is already registered")]
	DuplicateId { id: &'static str },

	/// A provider attempted to register a descriptor that is already present.
	#[error("provider for mode {mode:?} is already registered")]
	DuplicateMode { mode: SearchMode },
}

/// Failure raised by a backing data source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{source_name}: {message}")]
pub struct SourceError {
	pub source_name: String,
	pub message: String,
}

impl SourceError {
	pub fn new(source_name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			source_name: source_name.into(),
			message: message.into(),
		}
	}
}

/// Reasons a provider could not produce candidates.
///
/// None of these are fatal to callers; the aggregator logs them and degrades
/// to an empty result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
	/// The configured search page no longer exists.
	#[error("search page '{id}' is not registered")]
	MissingSearchPage { id: String },

	/// The configured search index no longer exists.
	#[error("search index '{id}' is not registered")]
	MissingIndex { id: String },

	/// The provider needs a content store but none was supplied.
	#[error("no content store is attached")]
	MissingStore,

	/// The underlying source failed while executing the query.
	#[error(transparent)]
	Source(#[from] SourceError),
}
