//! Provider interfaces shared between the `dupecheck` aggregator and the
//! crates that contribute search strategies to it.
//!
//! A provider turns a bag of [`QueryValues`] into an ordered list of
//! [`Candidate`]s. Providers are registered in a [`ProviderRegistry`] under a
//! static [`ProviderDescriptor`] and resolved by identifier at startup.

pub mod context;
pub mod descriptors;
pub mod error;
pub mod registry;
pub mod settings;
pub mod sources;
pub mod types;

pub use context::ProviderContext;
pub use descriptors::ProviderDescriptor;
pub use error::{ProviderError, ProviderRegistryError, SourceError};
pub use registry::{ProviderRegistry, RegisteredProvider, SearchProvider};
pub use settings::{SearchModeConfig, SettingsField, SettingsOption, SubmittedSettings};
pub use sources::{ContentSources, ContentStore, EntityQuery, PageHit, SearchIndex, SearchPage};
pub use types::{Candidate, EntityKey, Facet, QueryValues, SearchMode, SearchOptions};
