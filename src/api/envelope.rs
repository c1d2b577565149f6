use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

const MODERATION_CODE: &str = "content_moderation";

/// The JSON wrapper every backend response uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
	#[serde(default)]
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Machine readable error code, e.g. `content_moderation`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub code: Option<String>,
	/// Structured validation detail attached to 400 responses.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<Value>,
}

impl ApiEnvelope {
	fn is_moderation(&self) -> bool {
		self.code.as_deref() == Some(MODERATION_CODE)
			|| self
				.details
				.as_ref()
				.is_some_and(|details| details.get("moderation").is_some())
	}
}

/// Decode a response into its `data` payload or a classified error.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
	match status {
		200..=299 => decode_success(body),
		400 => Err(classify_bad_request(lenient(body))),
		401 => Err(ApiError::Unauthorized {
			message: lenient(body).and_then(|envelope| envelope.message),
		}),
		429 => Err(ApiError::RateLimited {
			message: lenient(body).and_then(|envelope| envelope.message),
		}),
		500..=599 => Err(ApiError::Server {
			status,
			message: lenient(body).and_then(|envelope| envelope.message),
		}),
		_ => Err(ApiError::UnexpectedStatus { status }),
	}
}

fn decode_success<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
	let envelope: ApiEnvelope = serde_json::from_str(body).map_err(ApiError::MalformedBody)?;
	if !envelope.success {
		return Err(ApiError::Rejected {
			message: envelope
				.message
				.unwrap_or_else(|| "no reason given".to_string()),
		});
	}
	serde_json::from_value(envelope.data.unwrap_or(Value::Null)).map_err(ApiError::InvalidData)
}

/// Error bodies are best effort; proxies may answer with HTML or nothing.
fn lenient(body: &str) -> Option<ApiEnvelope> {
	serde_json::from_str(body).ok()
}

fn classify_bad_request(envelope: Option<ApiEnvelope>) -> ApiError {
	let Some(envelope) = envelope else {
		return ApiError::Validation {
			message: "request was rejected".to_string(),
			details: None,
		};
	};

	if envelope.is_moderation() {
		return ApiError::ContentRejected {
			message: envelope
				.message
				.unwrap_or_else(|| "this content goes against the community guidelines".to_string()),
		};
	}

	ApiError::Validation {
		message: envelope
			.message
			.unwrap_or_else(|| "request was rejected".to_string()),
		details: envelope.details,
	}
}
