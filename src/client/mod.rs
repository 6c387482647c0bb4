//! Incremental search client: debouncing, caching and merging of responses.

pub mod cache;
pub mod controller;
pub mod runtime;
pub mod settings;
pub mod transport;

pub use cache::{ItemCache, QueryCache};
pub use controller::{
	ControllerState, DEFAULT_DEBOUNCE, DEFAULT_TIMEOUT, QueryRequest, SearchController, Timing,
};
pub use runtime::{ControllerEvent, ControllerHandle};
pub use settings::ClientSettings;
pub use transport::{LocalTransport, QueryTransport};
