mod card;
mod error;
mod html;
mod kind;
mod node;
mod number;
mod render;
mod response;
mod text;
mod value;

/// Result card and action status types.
pub use card::{ActionStatus, ResultCard};
/// Error and result aliases.
pub use error::{EchoError, Result};
/// HTML display surface.
pub use html::{render_card_html, render_html};
/// Analysis catalogue and documented reply shapes.
pub use kind::{
	AnalysisKind, DiarizationResponse, DiarizationSegment, Gender, GenderDetectionResponse, MetadataEnvelope, MetadataSections, OriginalTimestamps, Sentiment,
	SentimentResponse, TemporalIssue, TemporalResponse, TranscriptionResponse,
};
/// Display tree types.
pub use node::{BlockEntry, DisplayNode, ListItem, PLACEHOLDER_TEXT};
/// Structured value renderer entry points.
pub use render::{render, render_root};
/// Reply classification at the service boundary.
pub use response::{classify_json, classify_response, error_message, is_success};
/// Terminal text display surface.
pub use text::{TextStyle, render_card_text, render_text, write_node};
/// Structured value model.
pub use value::{MappingEntry, Primitive, StructuredValue};
