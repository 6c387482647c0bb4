use std::sync::Arc;

use crate::{descriptors::ProviderDescriptor, types::SearchMode};

use super::SearchProvider;

/// Metadata and implementation pair stored by the registry.
#[derive(Clone)]
pub struct RegisteredProvider {
	descriptor: &'static ProviderDescriptor,
	provider: Arc<dyn SearchProvider>,
}

impl RegisteredProvider {
	#[must_use]
	pub fn new(descriptor: &'static ProviderDescriptor, provider: Arc<dyn SearchProvider>) -> Self {
		Self {
			descriptor,
			provider,
		}
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		SearchMode::from_descriptor(self.descriptor)
	}

	#[must_use]
	pub fn descriptor(&self) -> &'static ProviderDescriptor {
		self.descriptor
	}

	#[must_use]
	pub fn provider(&self) -> Arc<dyn SearchProvider> {
		Arc::clone(&self.provider)
	}
}
