/// Static metadata advertised by a provider variant.
///
/// The availability predicate takes no instance: it answers whether the
/// subsystem the variant depends on is present at all, and is consulted only
/// when offering variants for configuration or resolving the configured one.
#[derive(Debug)]
pub struct ProviderDescriptor {
	/// Identifier stored in configuration to select this variant.
	pub id: &'static str,
	/// Human readable label used in configuration listings.
	pub label: &'static str,
	/// Capability check for the variant.
	pub available: fn() -> bool,
}

impl ProviderDescriptor {
	#[must_use]
	pub fn is_available(&self) -> bool {
		(self.available)()
	}
}

/// Availability predicate for variants without external requirements.
#[must_use]
pub fn always_available() -> bool {
	true
}
