use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use dupecheck::Scope;
use dupecheck::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("dupecheck {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "dupecheck",
	version,
	long_version = long_version(),
	about = "Find existing content similar to a title or tags",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `dupecheck` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DUPECHECK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "JSON file with content items, search pages and indexes (default: content.json in the data directory)"
	)]
	pub(crate) content: Option<PathBuf>,
	#[arg(short = 't', long, value_name = "TEXT", help = "Title to search for")]
	pub(crate) title: Option<String>,
	#[arg(long, value_name = "LIST", help = "Comma-separated tags to search for")]
	pub(crate) tags: Option<String>,
	#[arg(
		long = "entity-id",
		value_name = "ID",
		help = "Identifier of the item being edited, excluded from results"
	)]
	pub(crate) entity_id: Option<String>,
	#[arg(
		long = "entity-type",
		value_name = "TYPE",
		help = "Restrict results to this entity type"
	)]
	pub(crate) entity_type: Option<String>,
	#[arg(long, value_name = "BUNDLE", help = "Restrict results to this bundle")]
	pub(crate) bundle: Option<String>,
	#[arg(
		short = 'm',
		long = "search-mode",
		value_name = "ID",
		help = "Provider variant to search with (default: title)"
	)]
	pub(crate) search_mode: Option<String>,
	#[arg(
		long = "results-max",
		value_name = "NUM",
		help = "Maximum number of results shown (default: 10)"
	)]
	pub(crate) results_max: Option<usize>,
	#[arg(
		long = "query-min",
		value_name = "NUM",
		help = "Minimum characters typed before searching (default: 3)"
	)]
	pub(crate) query_min: Option<usize>,
	#[arg(
		long,
		help = "Accumulate results instead of replacing them (default: disabled)"
	)]
	pub(crate) prepend: bool,
	#[arg(
		long,
		value_enum,
		help = "Which items to search against (default: content-type)"
	)]
	pub(crate) scope: Option<ScopeArg>,
	#[arg(
		short = 'i',
		long,
		help = "Treat each stdin line as the current title and show live results (default: disabled)"
	)]
	pub(crate) interactive: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-modes",
		help = "List provider variants and exit (default: disabled)"
	)]
	pub(crate) list_modes: bool,
	#[arg(short = 'v', long, help = "Enable debug logging (default: disabled)")]
	pub(crate) verbose: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
/// Search scopes accepted via the command line.
pub(crate) enum ScopeArg {
	All,
	ContentType,
}

impl From<ScopeArg> for Scope {
	fn from(value: ScopeArg) -> Self {
		match value {
			ScopeArg::All => Scope::All,
			ScopeArg::ContentType => Scope::ContentType,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
