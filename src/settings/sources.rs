use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use ride_club::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "RIDE_CLUB";

/// Build a [`Config`] from the default locations, `--config` files and the environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	layered_config(&defaults, &cli.config, environment())
}

fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.prefix_separator("__")
		.separator("__")
		.try_parsing(true)
}

/// Optional files first, then required ones, then the environment on top.
fn layered_config(
	optional: &[PathBuf],
	required: &[PathBuf],
	environment: Environment,
) -> Result<Config> {
	let mut builder = Config::builder();

	for path in optional {
		builder = builder.add_source(File::from(path.clone()).required(false));
	}

	for path in required {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".ride-club.toml"));
		files.push(current_dir.join("ride-club.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::fs;

	use super::*;

	fn empty_environment() -> Environment {
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.source(Some(HashMap::new()))
	}

	#[test]
	fn default_files_include_working_directory_candidates() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".ride-club.toml")));
		assert!(files.iter().any(|path| path.ends_with("ride-club.toml")));
	}

	#[test]
	fn missing_optional_files_are_ignored() {
		let dir = tempfile::tempdir().expect("temp dir");
		let config = layered_config(&[dir.path().join("absent.toml")], &[], empty_environment())
			.expect("builds");
		assert!(config.get_string("output.format").is_err());
	}

	#[test]
	fn missing_required_files_fail() {
		let dir = tempfile::tempdir().expect("temp dir");
		let result = layered_config(&[], &[dir.path().join("absent.toml")], empty_environment());
		assert!(result.is_err());
	}

	#[test]
	fn later_files_override_earlier_ones() {
		let dir = tempfile::tempdir().expect("temp dir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[output]\nformat = \"plain\"\n").expect("write");
		fs::write(&second, "[output]\nformat = \"json\"\n").expect("write");

		let config = layered_config(&[first], &[second], empty_environment()).expect("builds");
		assert_eq!(config.get_string("output.format").unwrap(), "json");
	}

	#[test]
	fn environment_overrides_files() {
		let dir = tempfile::tempdir().expect("temp dir");
		let file = dir.path().join("config.toml");
		fs::write(&file, "[logging]\nlevel = \"info\"\n").expect("write");

		let env = HashMap::from([("RIDE_CLUB__LOGGING__LEVEL".to_string(), "debug".to_string())]);
		let environment = Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.source(Some(env));

		let config = layered_config(&[], &[file], environment).expect("builds");
		assert_eq!(config.get_string("logging.level").unwrap(), "debug");
	}
}
