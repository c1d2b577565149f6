//! Location catalog shared by the Ride Club clients.
//!
//! The catalog is a fixed, read-only table of named places (cities, airports,
//! transit stations, malls and universities) that riders pick origins and
//! destinations from. The built-in table is compiled into the crate and parsed
//! once on first access; callers can also build their own catalog from a TOML
//! document with the same layout.

mod builtin;
mod catalog;
mod error;
mod location;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use location::{Category, Location};
