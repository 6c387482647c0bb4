//! Live near-duplicate detection for content being written.
//!
//! A [`ResultAggregator`] runs the configured provider variant and folds its
//! output into a bounded, deduplicated list. The [`QueryEndpoint`] exposes
//! that over flat query parameters, and a [`SearchController`] decides when
//! to ask it while the user types.

pub mod aggregate;
pub mod app_dirs;
pub mod client;
pub mod config;
pub mod content;
pub mod endpoint;
pub mod logging;
pub mod providers;

pub use aggregate::{AggregationResult, ResultAggregator};
pub use client::{
	ClientSettings, ControllerHandle, LocalTransport, QueryTransport, SearchController,
};
pub use config::{ConfigValidationError, DupecheckConfig, Scope};
pub use endpoint::{QueryEndpoint, QueryResponse, WireRecord};
pub use providers::builtin_registry;

pub use dupecheck_provider_api as provider_api;
pub use dupecheck_view as view;
