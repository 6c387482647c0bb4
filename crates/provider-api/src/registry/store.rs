use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::descriptors::ProviderDescriptor;
use crate::error::ProviderRegistryError;
use crate::registry::RegisteredProvider;
use crate::types::SearchMode;

use super::SearchProvider;

/// Registry of every provider variant known to the application.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
	providers: IndexMap<SearchMode, RegisteredProvider>,
	id_index: HashMap<&'static str, SearchMode>,
}

impl ProviderRegistry {
	/// Create an empty registry without any providers registered.
	pub fn empty() -> Self {
		Self::default()
	}

	fn ensure_available(
		&self,
		descriptor: &'static ProviderDescriptor,
	) -> Result<(), ProviderRegistryError> {
		let mode = SearchMode::from_descriptor(descriptor);
		if self.providers.contains_key(&mode) {
			return Err(ProviderRegistryError::DuplicateMode { mode });
		}
		if self.id_index.contains_key(descriptor.id) {
			return Err(ProviderRegistryError::DuplicateId { id: descriptor.id });
		}
		Ok(())
	}

	/// Register a provider implementation for its declared mode.
	pub fn register<P>(&mut self, provider: P) -> Result<(), ProviderRegistryError>
	where
		P: SearchProvider + 'static,
	{
		let descriptor = provider.descriptor();
		self.ensure_available(descriptor)?;
		let provider: Arc<dyn SearchProvider> = Arc::new(provider);
		let registered = RegisteredProvider::new(descriptor, provider);
		let mode = registered.mode();
		self.providers.insert(mode, registered);
		self.id_index.insert(descriptor.id, mode);
		Ok(())
	}

	/// Lookup the provider servicing the requested mode.
	pub fn provider(&self, mode: SearchMode) -> Option<Arc<dyn SearchProvider>> {
		self.providers.get(&mode).map(RegisteredProvider::provider)
	}

	/// Iterate over all registered providers in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RegisteredProvider> {
		self.providers.values()
	}

	/// Iterate over registered provider descriptors.
	pub fn descriptors(&self) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
		self.providers.values().map(RegisteredProvider::descriptor)
	}

	/// Descriptors whose availability predicate currently holds.
	///
	/// This is what configuration screens offer as choices.
	pub fn available(&self) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
		self.descriptors().filter(|descriptor| descriptor.is_available())
	}

	/// Attempt to resolve a mode identifier to a registered provider.
	pub fn mode_by_id(&self, id: &str) -> Option<SearchMode> {
		self.id_index.get(id).copied()
	}

	/// Attempt to resolve a mode identifier to a registered provider implementation.
	pub fn provider_by_id(&self, id: &str) -> Option<Arc<dyn SearchProvider>> {
		self.mode_by_id(id).and_then(|mode| self.provider(mode))
	}

	/// Resolve `id` to a provider that is registered and available.
	pub fn resolve(&self, id: &str) -> Option<Arc<dyn SearchProvider>> {
		self.provider_by_id(id)
			.filter(|provider| provider.available())
	}

	/// Return the number of registered providers.
	pub fn len(&self) -> usize {
		self.providers.len()
	}

	/// Returns `true` when no providers have been registered.
	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Returns `true` if a provider has been registered for the provided mode.
	pub fn contains_mode(&self, mode: SearchMode) -> bool {
		self.providers.contains_key(&mode)
	}
}
