use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Effective settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	/// Catalog file to load; `None` selects the built-in catalog.
	pub catalog_path: Option<PathBuf>,
	pub output: OutputFormat,
	/// Log filter directive from config or `--log-level`.
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	/// Print the effective configuration to stderr, keeping stdout for results.
	pub fn print_summary(&self) {
		eprint!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let catalog = match &self.catalog_path {
			Some(path) => path.display().to_string(),
			None => "(built-in)".to_string(),
		};
		format!(
			"Effective configuration:\n  Catalog: {catalog}\n  Output: {}\n  Log level: {}\n",
			self.output.as_str(),
			self.log_level
				.as_deref()
				.unwrap_or("(RIDE_CLUB_LOG or warn)")
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_names_builtin_catalog() {
		let config = ResolvedConfig {
			catalog_path: None,
			output: OutputFormat::Json,
			log_level: Some("debug".into()),
		};
		let summary = config.summary();
		assert!(summary.contains("Catalog: (built-in)"));
		assert!(summary.contains("Output: json"));
		assert!(summary.contains("Log level: debug"));
	}
}
