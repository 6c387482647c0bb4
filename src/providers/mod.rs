//! Provider variants shipped with dupecheck and the registry wiring for them.

pub mod builtin;

use dupecheck_provider_api::{ProviderRegistry, ProviderRegistryError};

/// Build a registry containing every built-in provider variant.
///
/// Variants whose subsystem is compiled out stay registered but report
/// themselves unavailable, so a configuration naming them degrades to empty
/// results instead of failing to resolve an unknown id.
pub fn builtin_registry() -> Result<ProviderRegistry, ProviderRegistryError> {
	let mut registry = ProviderRegistry::empty();
	registry.register(builtin::title::TitleProvider)?;
	registry.register(builtin::search_page::SearchPageProvider)?;
	registry.register(builtin::search_index::SearchIndexProvider)?;
	Ok(registry)
}
