use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Two locations share the same identifier.
	#[error("location id '{id}' is already registered")]
	DuplicateId { id: String },

	/// A required text field is blank.
	#[error("location '{id}' has an empty {field}")]
	EmptyField { id: String, field: &'static str },

	/// A category tag did not name any known category.
	#[error("unknown location category '{value}'")]
	UnknownCategory { value: String },

	#[error("failed to parse catalog document: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("failed to read catalog file {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
