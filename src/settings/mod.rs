//! Configuration loading and resolution.
//!
//! `load` layers default config files, `--config` files, `RIDE_CLUB__*`
//! environment variables and finally command-line flags, and returns the
//! [`ResolvedConfig`] the binary runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
