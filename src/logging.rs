//! Diagnostic logging to stderr.
//!
//! Stdout carries command output only, so every log line goes to stderr.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "RIDE_CLUB_LOG";

/// Filter applied when neither the environment nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Later calls are ignored.
///
/// `RIDE_CLUB_LOG` takes precedence over `level`, which is any `EnvFilter`
/// directive such as `debug` or `ride_club=trace`.
pub fn initialize(level: Option<&str>) {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let filter = filter_for(level);
		let installed = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.with_target(false)
			.try_init();
		if let Err(error) = installed {
			eprintln!("ride-club: logging disabled: {error}");
		}
	});
}

fn filter_for(level: Option<&str>) -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
		return filter;
	}
	let directive = level
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.unwrap_or(DEFAULT_LEVEL);
	EnvFilter::try_new(directive).unwrap_or_else(|error| {
		eprintln!("ride-club: invalid log level '{directive}' ({error}), using {DEFAULT_LEVEL}");
		EnvFilter::new(DEFAULT_LEVEL)
	})
}
