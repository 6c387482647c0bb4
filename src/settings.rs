use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use dupecheck::app_dirs;
use dupecheck::client::Timing;
use dupecheck::provider_api::{Facet, QueryValues, SearchModeConfig};
use dupecheck::{DupecheckConfig, Scope};

use crate::cli::CliArgs;

/// Settings as they appear in configuration files and the environment.
///
/// Every field is optional so that layers only override what they name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	search_mode: Option<String>,
	search_mode_config: Option<SearchModeConfig>,
	scope: Option<Scope>,
	results_max: Option<usize>,
	query_min: Option<usize>,
	minimum_word_size: Option<usize>,
	results_prepend: Option<bool>,
	searching_string: Option<String>,
	no_result_string: Option<String>,
	default_description: Option<String>,
	endpoint_url: Option<String>,
	content: Option<PathBuf>,
	client: ClientSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ClientSection {
	debounce_ms: Option<u64>,
	timeout_ms: Option<u64>,
}

pub struct ResolvedConfig {
	pub module: DupecheckConfig,
	/// Fixture backing the in-memory content sources, if any.
	pub content: Option<PathBuf>,
	pub timing: Timing,
	/// Facets given on the command line.
	pub query: QueryValues,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		let module = &self.module;
		println!("Effective configuration:");
		println!("  Search mode: {}", module.search_mode);
		if let Some(page) = &module.search_mode_config.search_page {
			println!("  Search page: {page}");
		}
		if let Some(index) = &module.search_mode_config.search_api_index {
			println!("  Search index: {index}");
		}
		println!("  Scope: {}", module.scope.as_str());
		println!("  Maximum results: {}", module.results_max);
		println!("  Minimum query length: {}", module.query_min);
		println!("  Minimum word size: {}", module.minimum_word_size);
		println!("  Prepend results: {}", bool_to_word(module.results_prepend));
		println!("  Endpoint: {}", module.endpoint_url);
		println!(
			"  Content: {}",
			self.content
				.as_ref()
				.map(|path| path.display().to_string())
				.unwrap_or_else(|| "(none)".to_string())
		);
		println!("  Debounce: {} ms", self.timing.debounce.as_millis());
		println!("  Timeout: {} ms", self.timing.timeout.as_millis());
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(query_from_cli(cli))
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("dupecheck")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join("dupecheck.toml"));
	}

	files
}

/// Fixture used when none is configured.
fn default_content_file() -> Option<PathBuf> {
	let path = app_dirs::get_data_dir().ok()?.join("content.json");
	path.is_file().then_some(path)
}

fn query_from_cli(cli: &CliArgs) -> QueryValues {
	let mut values = QueryValues::new();
	for (facet, value) in [
		(Facet::Title, &cli.title),
		(Facet::Tags, &cli.tags),
		(Facet::EntityId, &cli.entity_id),
		(Facet::EntityType, &cli.entity_type),
		(Facet::Bundle, &cli.bundle),
	] {
		if let Some(value) = value {
			values.set(facet, value.as_str());
		}
	}
	values
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(mode) = cli.search_mode.clone() {
			self.search_mode = Some(mode);
		}
		if let Some(value) = cli.results_max {
			self.results_max = Some(value);
		}
		if let Some(value) = cli.query_min {
			self.query_min = Some(value);
		}
		if cli.prepend {
			self.results_prepend = Some(true);
		}
		if let Some(scope) = cli.scope {
			self.scope = Some(scope.into());
		}
		if let Some(path) = cli.content.clone() {
			self.content = Some(path);
		}
	}

	fn resolve(self, query: QueryValues) -> Result<ResolvedConfig> {
		let defaults = DupecheckConfig::default();
		let module = DupecheckConfig {
			search_mode: self
				.search_mode
				.map(|mode| mode.trim().to_string())
				.unwrap_or(defaults.search_mode),
			search_mode_config: self.search_mode_config.unwrap_or_default(),
			scope: self.scope.unwrap_or(defaults.scope),
			results_max: self.results_max.unwrap_or(defaults.results_max),
			query_min: self.query_min.unwrap_or(defaults.query_min),
			minimum_word_size: self
				.minimum_word_size
				.unwrap_or(defaults.minimum_word_size),
			results_prepend: self.results_prepend.unwrap_or(defaults.results_prepend),
			searching_string: self.searching_string.unwrap_or(defaults.searching_string),
			no_result_string: self.no_result_string.unwrap_or(defaults.no_result_string),
			default_description: self
				.default_description
				.unwrap_or(defaults.default_description),
			endpoint_url: self.endpoint_url.unwrap_or(defaults.endpoint_url),
		};
		module.validate().context("invalid configuration")?;

		let mut timing = Timing::default();
		if let Some(ms) = self.client.debounce_ms {
			timing.debounce = Duration::from_millis(ms);
		}
		if let Some(ms) = self.client.timeout_ms {
			timing.timeout = Duration::from_millis(ms);
		}

		Ok(ResolvedConfig {
			module,
			content: self.content.or_else(default_content_file),
			timing,
			query,
		})
	}
}
