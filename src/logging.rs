//! Diagnostic logging setup.
//!
//! Logs always go to stderr so they never interleave with responses printed
//! on stdout.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn initialize(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("dupecheck=debug,warn")
		} else {
			EnvFilter::new("dupecheck=info,warn")
		}
	});

	let fmt_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_target(verbose);

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt_layer)
		.try_init();
}
