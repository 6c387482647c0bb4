mod entity;
mod mode;
mod values;

pub use entity::{Candidate, EntityKey};
pub use mode::SearchMode;
pub use values::{Facet, QueryValues, SearchOptions};
