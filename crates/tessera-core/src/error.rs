//! Error types for tessera-core

use thiserror::Error;

/// Error type for markup construction and content loading
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
	/// Event attribute name outside the supported set
	#[error("Event {0} does not exist")]
	InvalidEventName(String),

	/// Unsupported value for a closed enumeration
	#[error("Invalid {kind} value: {value}")]
	InvalidEnumValue {
		/// Name of the enumeration (e.g. "list style")
		kind: &'static str,
		/// The rejected input
		value: String,
	},

	/// A file or URL could not be read
	#[error("Resource unavailable: {location}: {reason}")]
	ResourceUnavailable {
		/// Path or URL that was requested
		location: String,
		/// Underlying failure
		reason: String,
	},

	/// Page configuration could not be parsed or applied
	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),
}

impl MarkupError {
	/// Builds a `ResourceUnavailable` error from any displayable cause.
	pub fn unavailable(location: impl Into<String>, reason: impl std::fmt::Display) -> Self {
		Self::ResourceUnavailable {
			location: location.into(),
			reason: reason.to_string(),
		}
	}

	/// Builds an `InvalidEnumValue` error.
	pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
		Self::InvalidEnumValue {
			kind,
			value: value.into(),
		}
	}
}

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;
