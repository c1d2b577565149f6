mod cli;
mod settings;
mod workflow;

use std::io;

use anyhow::Result;
use cli::{Command, OutputFormat, parse_cli, print_json, print_plain};
use workflow::{LookupOutcome, LookupWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;
	ride_club::logging::initialize(resolved.log_level.as_deref());

	if cli.print_config {
		resolved.print_summary();
	}

	let format = resolved.output;
	let workflow = LookupWorkflow::from_config(&resolved)?;

	match &cli.command {
		Command::Interactive => {
			let stdin = io::stdin();
			workflow.interactive(stdin.lock(), |outcome| emit(format, outcome))
		}
		command => emit(format, &workflow.run(command)?),
	}
}

/// Print an outcome in the chosen format.
fn emit(format: OutputFormat, outcome: &LookupOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
