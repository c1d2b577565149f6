use std::borrow::Cow;
use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use ride_club::{Catalog, Category, Location, SuggestionWorker, search};

use crate::cli::Command;
use crate::settings::ResolvedConfig;

/// Result of a single lookup, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LookupOutcome {
	/// Ranked suggestions for a query.
	Suggestions {
		query: String,
		locations: Vec<Location>,
	},
	/// An unranked group, e.g. every airport.
	Listing {
		heading: String,
		locations: Vec<Location>,
	},
	Location(Location),
	Categories(Vec<CategorySummary>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CategorySummary {
	pub(crate) category: Category,
	pub(crate) count: usize,
}

/// Runs lookups against the configured catalog.
pub(crate) struct LookupWorkflow {
	catalog: Cow<'static, Catalog>,
}

impl LookupWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let catalog = match &config.catalog_path {
			Some(path) => Cow::Owned(
				Catalog::from_path(path)
					.with_context(|| format!("failed to load catalog {}", path.display()))?,
			),
			None => Cow::Borrowed(Catalog::builtin()),
		};
		Ok(Self::with_catalog(catalog))
	}

	pub(crate) fn with_catalog(catalog: Cow<'static, Catalog>) -> Self {
		Self { catalog }
	}

	/// Run a one-shot command. `interactive` is handled by [`Self::interactive`].
	pub(crate) fn run(&self, command: &Command) -> Result<LookupOutcome> {
		let catalog: &Catalog = &self.catalog;
		let outcome = match command {
			Command::Search { query } => {
				let query = query.join(" ");
				let locations = search(catalog, &query).into_iter().cloned().collect();
				LookupOutcome::Suggestions { query, locations }
			}
			Command::Category { category } => LookupOutcome::Listing {
				heading: format!("{} locations", category.label()),
				locations: catalog.by_category(*category).into_iter().cloned().collect(),
			},
			Command::Region { region } => {
				let region = region.trim().to_uppercase();
				let locations = catalog.by_region(&region).into_iter().cloned().collect();
				LookupOutcome::Listing {
					heading: format!("Locations in {region}"),
					locations,
				}
			}
			Command::Show { id } => match catalog.get(id.trim()) {
				Some(location) => LookupOutcome::Location(location.clone()),
				None => bail!("no location with id '{}'", id.trim()),
			},
			Command::Categories => LookupOutcome::Categories(
				Category::ALL
					.into_iter()
					.map(|category| CategorySummary {
						category,
						count: catalog.by_category(category).len(),
					})
					.collect(),
			),
			Command::Interactive => bail!("interactive mode is not a one-shot lookup"),
		};
		Ok(outcome)
	}

	/// Answer each input line with suggestions, in order, through the worker.
	pub(crate) fn interactive<R, F>(self, input: R, mut emit: F) -> Result<()>
	where
		R: BufRead,
		F: FnMut(&LookupOutcome) -> Result<()>,
	{
		let mut worker = match self.catalog {
			Cow::Borrowed(catalog) => SuggestionWorker::spawn(catalog),
			Cow::Owned(catalog) => SuggestionWorker::spawn(Arc::new(catalog)),
		};

		for line in input.lines() {
			let line = line.context("failed to read query from stdin")?;
			let id = worker.submit(line);
			loop {
				let Some(result) = worker.recv() else {
					bail!("suggestion worker stopped unexpectedly");
				};
				if result.id == id {
					emit(&LookupOutcome::Suggestions {
						query: result.query,
						locations: result.locations,
					})?;
					break;
				}
			}
		}

		worker.shutdown();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn workflow() -> LookupWorkflow {
		LookupWorkflow::with_catalog(Cow::Borrowed(Catalog::builtin()))
	}

	#[test]
	fn search_joins_query_words() {
		let outcome = workflow()
			.run(&Command::Search {
				query: vec!["quebec".into(), "city".into()],
			})
			.expect("search runs");
		let LookupOutcome::Suggestions { query, locations } = outcome else {
			panic!("expected suggestions");
		};
		assert_eq!(query, "quebec city");
		assert!(locations.len() <= ride_club::MAX_RESULTS);
	}

	#[test]
	fn region_input_is_normalized() {
		let outcome = workflow()
			.run(&Command::Region {
				region: " qc ".into(),
			})
			.expect("region runs");
		let LookupOutcome::Listing { heading, locations } = outcome else {
			panic!("expected listing");
		};
		assert_eq!(heading, "Locations in QC");
		assert!(!locations.is_empty());
		assert!(locations.iter().all(|location| location.region == "QC"));
	}

	#[test]
	fn show_reports_missing_ids() {
		let err = workflow()
			.run(&Command::Show { id: "atlantis".into() })
			.unwrap_err();
		assert!(err.to_string().contains("atlantis"));
	}

	#[test]
	fn categories_add_up_to_the_catalog() {
		let outcome = workflow().run(&Command::Categories).expect("runs");
		let LookupOutcome::Categories(summaries) = outcome else {
			panic!("expected categories");
		};
		let total: usize = summaries.iter().map(|summary| summary.count).sum();
		assert_eq!(total, Catalog::builtin().len());
	}

	#[test]
	fn interactive_answers_every_line_in_order() {
		let input = Cursor::new("tor\n\nhalifax\n");
		let mut seen = Vec::new();
		workflow()
			.interactive(input, |outcome| {
				if let LookupOutcome::Suggestions { query, locations } = outcome {
					seen.push((query.clone(), locations.len()));
				}
				Ok(())
			})
			.expect("interactive runs");

		assert_eq!(seen.len(), 3);
		assert_eq!(seen[0].0, "tor");
		assert_eq!(seen[1], (String::new(), 0));
		assert_eq!(seen[2].0, "halifax");
		assert!(seen[2].1 > 0);
	}
}
