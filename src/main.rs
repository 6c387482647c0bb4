mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	dupecheck::logging::initialize(cli.verbose);

	if cli.list_modes {
		list_modes()?;
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	if cli.interactive {
		return workflow.run_interactive();
	}

	let response = workflow.run_once();
	match cli.output {
		OutputFormat::Plain => print_plain(&response, workflow.labels()),
		OutputFormat::Json => print_json(&response)?,
	}

	Ok(())
}

/// Print every provider variant, marking the ones that cannot be used.
fn list_modes() -> Result<()> {
	let registry = dupecheck::builtin_registry()?;
	for descriptor in registry.descriptors() {
		let marker = if descriptor.is_available() {
			""
		} else {
			" (unavailable)"
		};
		println!("{}\t{}{marker}", descriptor.id, descriptor.label);
	}
	Ok(())
}
