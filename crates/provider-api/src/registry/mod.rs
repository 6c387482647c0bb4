mod provider;
mod registered_provider;
mod store;

pub use provider::SearchProvider;
pub use registered_provider::RegisteredProvider;
pub use store::ProviderRegistry;
