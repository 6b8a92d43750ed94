use thiserror::Error;

use crate::view::AnalysisKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, EchoError>;

/// Errors produced while loading, classifying, and encoding analysis replies.
#[derive(Debug, Error)]
pub enum EchoError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Successful reply whose body is not valid JSON.
	#[error("malformed response body: {0}")]
	MalformedBody(#[source] serde_json::Error),
	/// Reply rejected by the analysis service.
	#[error("{message}")]
	Rejected {
		/// HTTP status code of the reply.
		status: u16,
		/// Message extracted from the error payload.
		message: String,
	},
	/// Reply body does not match the documented shape for its analysis.
	#[error("{kind} response has unexpected shape: {source}")]
	ShapeMismatch {
		/// Analysis the body was checked against.
		kind: AnalysisKind,
		/// Deserialization failure describing the mismatch.
		#[source]
		source: serde_json::Error,
	},
	/// Analysis kind name is not recognized.
	#[error("unknown analysis kind: {name}")]
	UnknownAnalysisKind {
		/// User-provided name.
		name: String,
	},
	/// Display output could not be encoded as JSON.
	#[error("encode: {0}")]
	Encode(#[source] serde_json::Error),
}
