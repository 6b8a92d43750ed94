use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::view::{EchoError, Result, StructuredValue};

/// Analysis actions offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
	/// Speech-to-text.
	Transcription,
	/// Sentiment classification.
	Sentiment,
	/// Speaker gender inference.
	Gender,
	/// Speaker diarization.
	Diarization,
	/// Temporal splice detection.
	Temporal,
	/// File and audio metadata extraction.
	Metadata,
}

impl AnalysisKind {
	/// Every kind, in menu order.
	pub const ALL: [AnalysisKind; 6] = [
		AnalysisKind::Transcription,
		AnalysisKind::Sentiment,
		AnalysisKind::Gender,
		AnalysisKind::Diarization,
		AnalysisKind::Temporal,
		AnalysisKind::Metadata,
	];

	/// Stable lowercase name used on the command line.
	pub fn name(self) -> &'static str {
		match self {
			AnalysisKind::Transcription => "transcription",
			AnalysisKind::Sentiment => "sentiment",
			AnalysisKind::Gender => "gender",
			AnalysisKind::Diarization => "diarization",
			AnalysisKind::Temporal => "temporal",
			AnalysisKind::Metadata => "metadata",
		}
	}

	/// Heading shown on the action and its result card.
	pub fn title(self) -> &'static str {
		match self {
			AnalysisKind::Transcription => "Transcribe",
			AnalysisKind::Sentiment => "Sentiment Analysis",
			AnalysisKind::Gender => "Gender Detection",
			AnalysisKind::Diarization => "Speaker Diarization",
			AnalysisKind::Temporal => "Temporal Inconsistency Detection",
			AnalysisKind::Metadata => "Metadata",
		}
	}

	/// Check a reply body against this kind's documented response shape.
	///
	/// Extra fields are accepted; missing or mistyped documented fields are not.
	pub fn check_shape(self, body: &JsonValue) -> Result<()> {
		let checked = match self {
			AnalysisKind::Transcription => TranscriptionResponse::deserialize(body).map(drop),
			AnalysisKind::Sentiment => SentimentResponse::deserialize(body).map(drop),
			AnalysisKind::Gender => GenderDetectionResponse::deserialize(body).map(drop),
			AnalysisKind::Diarization => DiarizationResponse::deserialize(body).map(drop),
			AnalysisKind::Temporal => TemporalResponse::deserialize(body).map(drop),
			AnalysisKind::Metadata => MetadataEnvelope::deserialize(body).map(drop),
		};
		checked.map_err(|source| EchoError::ShapeMismatch { kind: self, source })
	}

	/// Check the body's shape, then classify it for rendering.
	pub fn accept(self, body: JsonValue) -> Result<StructuredValue> {
		self.check_shape(&body)?;
		Ok(StructuredValue::from(body))
	}
}

impl fmt::Display for AnalysisKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for AnalysisKind {
	type Err = EchoError;

	fn from_str(name: &str) -> Result<Self> {
		AnalysisKind::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(name))
			.ok_or_else(|| EchoError::UnknownAnalysisKind { name: name.to_owned() })
	}
}

/// Transcription reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
	/// Recognized text. The upload endpoint names it `transcription`.
	#[serde(alias = "transcription")]
	pub text: String,
}

/// Sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
	/// Positive tone.
	Positive,
	/// Neutral tone.
	Neutral,
	/// Negative tone.
	Negative,
}

/// Sentiment reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
	/// Predicted class.
	pub sentiment: Sentiment,
	/// Classifier score, when reported.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
}

/// Inferred speaker gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	/// Male voice.
	Male,
	/// Female voice.
	Female,
	/// Undetermined.
	Unknown,
}

/// Gender detection reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderDetectionResponse {
	/// Predicted gender.
	pub gender: Gender,
	/// Confidence, when reported.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub confidence: Option<f64>,
}

/// One diarized speaker turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiarizationSegment {
	/// Start time in seconds.
	pub start: f64,
	/// End time in seconds.
	pub end: f64,
	/// Speaker label.
	pub speaker: String,
	/// Location of the extracted segment audio.
	pub file_url: String,
}

/// Diarization reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiarizationResponse {
	/// Number of distinct speakers found.
	pub estimated_speakers: u32,
	/// Speaker turns in time order.
	pub segments: Vec<DiarizationSegment>,
}

/// Suspected splice point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalIssue {
	/// Position in seconds.
	pub timestamp: f64,
	/// What was detected.
	pub description: String,
}

/// Temporal inconsistency reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalResponse {
	/// Detected issues.
	pub issues: Vec<TemporalIssue>,
}

/// File timestamps echoed back by the metadata service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalTimestamps {
	/// Last-modified time as sent by the client.
	pub modified: Option<String>,
	/// Creation time as sent by the client.
	pub created: Option<String>,
}

/// Named metadata sections; each section is an ordered field map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataSections {
	/// File name, size, and filesystem times.
	#[serde(rename = "File System Information")]
	pub file_system: Map<String, JsonValue>,
	/// Sample rate, channels, and duration.
	#[serde(rename = "Audio Properties")]
	pub audio_properties: Map<String, JsonValue>,
	/// Container and codec findings.
	#[serde(rename = "Format Analysis")]
	pub format_analysis: Map<String, JsonValue>,
	/// Content hashes.
	#[serde(rename = "File Fingerprints")]
	pub fingerprints: Map<String, JsonValue>,
	/// Signal-level measurements.
	#[serde(rename = "Advanced Audio Analysis")]
	pub advanced_analysis: Map<String, JsonValue>,
	/// Embedded tag frames.
	#[serde(rename = "Metadata Tags")]
	pub tags: Map<String, JsonValue>,
}

/// Metadata extraction reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEnvelope {
	/// Whether extraction succeeded.
	pub success: bool,
	/// Uploaded file name.
	pub filename: String,
	/// When the analysis ran.
	pub analysis_timestamp: String,
	/// Client timestamps, when they were sent.
	#[serde(default)]
	pub original_timestamps_received: Option<OriginalTimestamps>,
	/// Extracted sections.
	pub metadata: MetadataSections,
}
