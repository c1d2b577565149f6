//! Client-side view of the Ride Club backend's response envelope.
//!
//! Every endpoint answers with `{ "success": bool, "data": ..., "message": ... }`
//! and a status code. [`decode`] turns a status and body into either the
//! payload or a classified [`ApiError`].

mod envelope;
mod error;

pub use envelope::{ApiEnvelope, decode};
pub use error::{ApiError, ErrorAction};
