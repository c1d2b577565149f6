use serde_json::Value;
use thiserror::Error;

/// Failures reported by, or while talking to, the backend.
#[derive(Debug, Error)]
pub enum ApiError {
	/// 401: the session token is missing or expired.
	#[error("authentication required")]
	Unauthorized { message: Option<String> },

	/// 429: too many requests in the current window.
	#[error("too many requests, try again later")]
	RateLimited { message: Option<String> },

	/// 400 carrying moderation detail: the submitted text was refused.
	#[error("content not allowed: {message}")]
	ContentRejected { message: String },

	/// Any other 400.
	#[error("invalid request: {message}")]
	Validation {
		message: String,
		details: Option<Value>,
	},

	/// 5xx.
	#[error("server error ({status})")]
	Server {
		status: u16,
		message: Option<String>,
	},

	/// 2xx whose envelope reports `success: false`.
	#[error("request failed: {message}")]
	Rejected { message: String },

	/// 2xx with `success: true` whose `data` is absent or has the wrong shape.
	#[error("unexpected response data: {0}")]
	InvalidData(#[source] serde_json::Error),

	#[error("malformed response body: {0}")]
	MalformedBody(#[source] serde_json::Error),

	#[error("unexpected response status {status}")]
	UnexpectedStatus { status: u16 },
}

/// What the caller should do about an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
	/// Send the user back to sign in.
	Reauthenticate,
	/// Show the message; retrying the same request will not help.
	Inform,
	/// Offer to retry later.
	Retry,
}

impl ApiError {
	#[must_use]
	pub fn action(&self) -> ErrorAction {
		match self {
			ApiError::Unauthorized { .. } => ErrorAction::Reauthenticate,
			ApiError::RateLimited { .. } | ApiError::Server { .. } => ErrorAction::Retry,
			ApiError::ContentRejected { .. }
			| ApiError::Validation { .. }
			| ApiError::Rejected { .. }
			| ApiError::InvalidData(_)
			| ApiError::MalformedBody(_)
			| ApiError::UnexpectedStatus { .. } => ErrorAction::Inform,
		}
	}

	/// The backend's own message, when it sent one.
	#[must_use]
	pub fn server_message(&self) -> Option<&str> {
		match self {
			ApiError::Unauthorized { message }
			| ApiError::RateLimited { message }
			| ApiError::Server { message, .. } => message.as_deref(),
			ApiError::ContentRejected { message }
			| ApiError::Validation { message, .. }
			| ApiError::Rejected { message } => Some(message.as_str()),
			ApiError::InvalidData(_)
			| ApiError::MalformedBody(_)
			| ApiError::UnexpectedStatus { .. } => None,
		}
	}
}
