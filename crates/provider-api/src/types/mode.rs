use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use crate::descriptors::ProviderDescriptor;

/// Handle for one provider variant.
///
/// Two modes are equal only when they point at the same static descriptor,
/// so variants with clashing ids still stay distinct.
#[derive(Clone, Copy)]
pub struct SearchMode {
	descriptor: &'static ProviderDescriptor,
}

impl SearchMode {
	#[must_use]
	pub const fn from_descriptor(descriptor: &'static ProviderDescriptor) -> Self {
		Self { descriptor }
	}

	/// Identifier stored in configuration.
	#[must_use]
	pub const fn id(self) -> &'static str {
		self.descriptor.id
	}

	#[must_use]
	pub const fn descriptor(self) -> &'static ProviderDescriptor {
		self.descriptor
	}
}

impl PartialEq for SearchMode {
	fn eq(&self, other: &Self) -> bool {
		ptr::eq(self.descriptor, other.descriptor)
	}
}

impl Eq for SearchMode {}

impl Hash for SearchMode {
	fn hash<H: Hasher>(&self, state: &mut H) {
		ptr::hash(self.descriptor, state);
	}
}

impl fmt::Debug for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SearchMode").field(&self.id()).finish()
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}
