use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::{CliArgs, OutputFormat};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	output: OutputSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputSection {
	format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(format) = cli.output {
			self.output.format = Some(format.as_str().to_string());
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let catalog_path = match self.catalog.path {
			Some(path) if path.as_os_str().is_empty() => None,
			Some(path) if path.is_relative() => Some(
				env::current_dir()
					.context("failed to resolve current directory for catalog path")?
					.join(path),
			),
			other => other,
		};

		let output = match self.output.format {
			Some(format) => parse_output(&format)?,
			None => OutputFormat::default(),
		};

		let log_level = self
			.logging
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty());

		Ok(ResolvedConfig {
			catalog_path,
			output,
			log_level,
		})
	}
}

fn parse_output(value: &str) -> Result<OutputFormat> {
	match OutputFormat::from_str(value.trim(), true) {
		Ok(format) => Ok(format),
		Err(_) => bail!("unknown output format '{}'", value.trim()),
	}
}
