use std::fmt::Write;

use anyhow::Result;
use ride_club::Location;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::workflow::LookupOutcome;

const HEADERS: [&str; 4] = ["ID", "NAME", "REGION", "CATEGORY"];
const COLUMN_GAP: &str = "  ";

/// Print a plain-text representation of the lookup outcome.
pub(crate) fn print_plain(outcome: &LookupOutcome) {
	print!("{}", format_plain(outcome));
}

pub(crate) fn format_plain(outcome: &LookupOutcome) -> String {
	match outcome {
		LookupOutcome::Suggestions { query, locations } => {
			if locations.is_empty() {
				format!("No locations match '{query}'\n")
			} else {
				render_table(locations)
			}
		}
		LookupOutcome::Listing { heading, locations } => {
			let mut text = format!("{heading} ({})\n", locations.len());
			if !locations.is_empty() {
				text.push_str(&render_table(locations));
			}
			text
		}
		LookupOutcome::Location(location) => {
			let mut text = String::new();
			let _ = writeln!(text, "id:       {}", location.id);
			let _ = writeln!(text, "name:     {}", location.name);
			let _ = writeln!(text, "region:   {}", location.region);
			let _ = writeln!(
				text,
				"category: {} ({})",
				location.category,
				location.category.label()
			);
			text
		}
		LookupOutcome::Categories(summaries) => {
			let rows: Vec<[String; 3]> = summaries
				.iter()
				.map(|summary| {
					[
						summary.category.as_str().to_string(),
						summary.category.label().to_string(),
						summary.count.to_string(),
					]
				})
				.collect();
			render_rows(&["CATEGORY", "LABEL", "COUNT"], &rows)
		}
	}
}

fn render_table(locations: &[Location]) -> String {
	let rows: Vec<[String; 4]> = locations
		.iter()
		.map(|location| {
			[
				location.id.clone(),
				location.name.clone(),
				location.region.clone(),
				location.category.as_str().to_string(),
			]
		})
		.collect();
	render_rows(&HEADERS, &rows)
}

/// Left-align columns by display width so accented names line up.
fn render_rows<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
	let mut widths = headers.map(|header| header.width());
	for row in rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut text = String::new();
	push_row(&mut text, headers.iter().copied(), &widths);
	for row in rows {
		push_row(&mut text, row.iter().map(String::as_str), &widths);
	}
	text
}

fn push_row<'a>(text: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
	let mut line = String::new();
	for (index, (cell, width)) in cells.zip(widths).enumerate() {
		if index > 0 {
			line.push_str(COLUMN_GAP);
		}
		line.push_str(cell);
		let padding = width.saturating_sub(cell.width());
		line.extend(std::iter::repeat_n(' ', padding));
	}
	text.push_str(line.trim_end());
	text.push('\n');
}

/// Format the lookup outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &LookupOutcome) -> Result<String> {
	let payload = match outcome {
		LookupOutcome::Suggestions { query, locations } => json!({
			"query": query,
			"count": locations.len(),
			"locations": locations,
		}),
		LookupOutcome::Listing { heading, locations } => json!({
			"heading": heading,
			"count": locations.len(),
			"locations": locations,
		}),
		LookupOutcome::Location(location) => serde_json::to_value(location)?,
		LookupOutcome::Categories(summaries) => summaries
			.iter()
			.map(|summary| {
				json!({
					"category": summary.category,
					"label": summary.category.label(),
					"count": summary.count,
				})
			})
			.collect(),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the lookup outcome.
pub(crate) fn print_json(outcome: &LookupOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use ride_club::Category;
	use serde_json::Value;

	use super::*;
	use crate::workflow::CategorySummary;

	fn suggestions() -> LookupOutcome {
		LookupOutcome::Suggestions {
			query: "mont".into(),
			locations: vec![
				Location::new("montreal", "Montréal", "QC", Category::City),
				Location::new("yul", "Montréal-Trudeau", "QC", Category::Airport),
			],
		}
	}

	#[test]
	fn json_format_lists_locations() {
		let json = format_outcome_json(&suggestions()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "mont");
		assert_eq!(value["count"], 2);
		assert_eq!(value["locations"][0]["id"], "montreal");
		assert_eq!(value["locations"][1]["category"], "airport");
	}

	#[test]
	fn json_format_lists_categories() {
		let outcome = LookupOutcome::Categories(vec![CategorySummary {
			category: Category::Transit,
			count: 3,
		}]);
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value[0]["category"], "transit");
		assert_eq!(value[0]["label"], "Transit station");
		assert_eq!(value[0]["count"], 3);
	}

	#[test]
	fn plain_table_aligns_accented_names() {
		let text = format_plain(&suggestions());
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		let region_column = |line: &str| {
			let offset = line.find("QC").or_else(|| line.find("REGION")).expect("column");
			line[..offset].width()
		};
		assert_eq!(region_column(lines[0]), region_column(lines[1]));
		assert_eq!(region_column(lines[1]), region_column(lines[2]));
	}

	#[test]
	fn plain_reports_empty_suggestions() {
		let outcome = LookupOutcome::Suggestions {
			query: "zzz".into(),
			locations: Vec::new(),
		};
		assert_eq!(format_plain(&outcome), "No locations match 'zzz'\n");
	}

	#[test]
	fn plain_listing_has_heading_with_count() {
		let outcome = LookupOutcome::Listing {
			heading: "Airport locations".into(),
			locations: Vec::new(),
		};
		assert_eq!(format_plain(&outcome), "Airport locations (0)\n");
	}
}
