use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Category, CatalogError, Location};

/// An immutable set of locations, kept in definition order.
///
/// Once built a catalog offers no way to add, change or remove entries, so a
/// shared reference can be handed to any number of readers.
#[derive(Debug, Clone)]
pub struct Catalog {
	locations: Vec<Location>,
	by_id: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
	#[serde(default)]
	locations: Vec<Location>,
}

impl Catalog {
	/// Build a catalog, rejecting blank fields and duplicate ids.
	pub fn from_locations(locations: Vec<Location>) -> Result<Self, CatalogError> {
		let mut by_id = HashMap::with_capacity(locations.len());
		for (index, location) in locations.iter().enumerate() {
			validate(location)?;
			if by_id.insert(location.id.clone(), index).is_some() {
				return Err(CatalogError::DuplicateId {
					id: location.id.clone(),
				});
			}
		}
		Ok(Self { locations, by_id })
	}

	/// Parse a TOML document holding a `locations` array of tables.
	pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
		let parsed: CatalogDocument = toml::from_str(document)?;
		Self::from_locations(parsed.locations)
	}

	pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
		let document = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::from_toml_str(&document)?;
		tracing::debug!(path = %path.display(), locations = catalog.len(), "loaded catalog file");
		Ok(catalog)
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&Location> {
		self.by_id.get(id).map(|&index| &self.locations[index])
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Location> {
		self.locations.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Location] {
		&self.locations
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.locations.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.locations.is_empty()
	}

	/// All locations with exactly `category`, in catalog order.
	#[must_use]
	pub fn by_category(&self, category: Category) -> Vec<&Location> {
		self.locations
			.iter()
			.filter(|location| location.category == category)
			.collect()
	}

	/// All locations whose region code equals `region`, in catalog order.
	#[must_use]
	pub fn by_region(&self, region: &str) -> Vec<&Location> {
		self.locations
			.iter()
			.filter(|location| location.region == region)
			.collect()
	}

	/// Distinct region codes in the order they first appear.
	#[must_use]
	pub fn regions(&self) -> Vec<&str> {
		let mut seen = Vec::new();
		for location in &self.locations {
			if !seen.contains(&location.region.as_str()) {
				seen.push(location.region.as_str());
			}
		}
		seen
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a Location;
	type IntoIter = std::slice::Iter<'a, Location>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

fn validate(location: &Location) -> Result<(), CatalogError> {
	let fields = [
		("id", location.id.as_str()),
		("name", location.name.as_str()),
		("region", location.region.as_str()),
	];
	for (field, value) in fields {
		if value.trim().is_empty() {
			return Err(CatalogError::EmptyField {
				id: location.id.clone(),
				field,
			});
		}
	}
	Ok(())
}
