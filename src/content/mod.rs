//! In-memory implementations of the provider data sources, plus a JSON
//! fixture format to populate them.

mod fixture;
mod memory;

pub use fixture::{
	ContentFixture, ContentItem, FixtureError, IndexDefinition, PageDefinition, PageKind,
};
pub use memory::{MemoryIndex, MemoryPage, MemoryStore};
