use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use tracing::{info, warn};

use dupecheck::client::{ControllerEvent, ControllerHandle, SearchController};
use dupecheck::content::ContentFixture;
use dupecheck::provider_api::{ContentSources, ProviderRegistry};
use dupecheck::view::ViewLabels;
use dupecheck::{
	ClientSettings, LocalTransport, QueryEndpoint, QueryResponse, ResultAggregator,
	builtin_registry,
};

use crate::cli::print_snapshot;
use crate::settings::ResolvedConfig;

/// Wires configuration, content sources and providers into an endpoint.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	endpoint: QueryEndpoint,
	labels: ViewLabels,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let sources = load_sources(&config)?;
		let registry = builtin_registry().context("failed to register built-in providers")?;
		warn_if_unavailable(&registry, &config.module.search_mode);

		let aggregator = ResultAggregator::new(
			Arc::new(registry),
			Arc::new(sources),
			Arc::new(config.module.clone()),
		);
		let labels = ViewLabels::default().with_description(&config.module.default_description);
		Ok(Self {
			config,
			endpoint: QueryEndpoint::new(aggregator),
			labels,
		})
	}

	pub(crate) fn labels(&self) -> &ViewLabels {
		&self.labels
	}

	/// Answer the query given on the command line.
	pub(crate) fn run_once(&self) -> QueryResponse {
		self.endpoint.handle(&self.config.query)
	}

	/// Feed stdin lines into a live controller and print every update.
	pub(crate) fn run_interactive(self) -> Result<()> {
		let query = &self.config.query;
		let settings = ClientSettings::for_form(
			&self.config.module,
			query.entity_type.as_deref(),
			query.bundle.as_deref(),
			query.entity_id.as_deref(),
		);
		let controller = SearchController::with_timing(settings, self.config.timing);
		let transport = Arc::new(LocalTransport::new(self.endpoint.clone()));
		let handle = ControllerHandle::spawn(controller, transport);

		let events = handle.sender();
		let reader = thread::spawn(move || -> io::Result<()> {
			for line in io::stdin().lock().lines() {
				let line = line?;
				let text = line.trim_end_matches('\r').to_string();
				if events.send(ControllerEvent::TitleInput(text)).is_err() {
					break;
				}
			}
			let _ = events.send(ControllerEvent::Close);
			Ok(())
		});

		for snapshot in handle.snapshots() {
			print_snapshot(&snapshot, &self.labels);
		}
		handle.shutdown();

		match reader.join() {
			Ok(result) => result.context("failed to read from stdin"),
			Err(_) => anyhow::bail!("stdin reader panicked"),
		}
	}
}

fn load_sources(config: &ResolvedConfig) -> Result<ContentSources> {
	let Some(path) = &config.content else {
		warn!("no content fixture configured; searches will return nothing");
		return Ok(ContentSources::new());
	};
	let fixture = ContentFixture::load(path)
		.with_context(|| format!("failed to load content from {}", path.display()))?;
	info!(
		path = %path.display(),
		items = fixture.items.len(),
		"loaded content fixture"
	);
	Ok(fixture.into_sources())
}

fn warn_if_unavailable(registry: &ProviderRegistry, search_mode: &str) {
	if registry.resolve(search_mode).is_none() {
		let available: Vec<&str> = registry.available().map(|descriptor| descriptor.id).collect();
		warn!(
			mode = search_mode,
			available = %available.join(", "),
			"configured search mode is not available"
		);
	}
}
