use byteview::{ExtractError, HostError};
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading a value source failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input or output JSON was malformed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON parsed but did not describe a value.
	#[error("invalid value notation: {message}")]
	Notation {
		/// What was wrong with the notation.
		message: String,
	},
	/// Byte view extraction failed.
	#[error(transparent)]
	Extract(#[from] ExtractError<HostError>),
	/// Stringification failed.
	#[error(transparent)]
	Host(#[from] HostError),
}

impl CliError {
	pub(crate) fn notation(message: impl Into<String>) -> Self {
		Self::Notation { message: message.into() }
	}
}
