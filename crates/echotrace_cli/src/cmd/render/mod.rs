use std::path::PathBuf;

use echotrace::view::{
	AnalysisKind, EchoError, Result, ResultCard, StructuredValue, TextStyle, classify_json, render_card_html, render_card_text,
};
use tracing::{debug, warn};

use crate::cmd::util::read_input;

/// Title used when no analysis kind is given.
const DEFAULT_TITLE: &str = "Result";

/// Output surface for the rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Indented terminal text.
	Text,
	/// HTML markup with inline styles.
	Html,
	/// Card and display tree as JSON.
	Json,
}

#[derive(clap::Args)]
pub struct Args {
	/// Reply body file; `-` or omitted reads stdin.
	pub input: Option<PathBuf>,
	/// Analysis the reply belongs to; checks its shape and titles the card.
	#[arg(long)]
	pub kind: Option<AnalysisKind>,
	/// HTTP status code the reply arrived with.
	#[arg(long, default_value_t = 200)]
	pub status: u16,
	/// HTTP reason phrase the reply arrived with.
	#[arg(long, default_value = "")]
	pub reason: String,
	#[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "ECHOTRACE_FORMAT")]
	pub format: OutputFormat,
	/// Bold labels and dim placeholders in text output.
	#[arg(long, env = "ECHOTRACE_COLOR")]
	pub color: bool,
	/// Starting nesting depth of the body.
	#[arg(long, default_value_t = 0)]
	pub depth: u32,
}

/// Classify a reply, render it into a result card, and print it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		kind,
		status,
		reason,
		format,
		color,
		depth,
	} = args;

	let body = read_input(input.as_deref())?;
	debug!(bytes = body.len(), status, "read reply body");

	let card = build_card(kind, status, &reason, &body, depth);
	debug!(status = card.status.as_str(), "card ready");

	let style = if color { TextStyle::Ansi } else { TextStyle::Plain };
	print!("{}", format_card(&card, format, style)?);
	Ok(())
}

/// Run a reply through the response boundary and the optional shape check.
///
/// Rejected, malformed, and mis-shaped replies produce an error card with no body.
pub(crate) fn build_card(kind: Option<AnalysisKind>, status: u16, reason: &str, body: &[u8], depth: u32) -> ResultCard {
	let title = kind.map_or(DEFAULT_TITLE, AnalysisKind::title);
	let outcome = classify_json(status, reason, body).and_then(|json| match kind {
		Some(kind) => kind.accept(json),
		None => Ok(StructuredValue::from(json)),
	});
	if let Err(err) = &outcome {
		warn!(%err, "reply not rendered");
	}

	let mut card = ResultCard::new(title).with_depth(depth);
	card.start();
	card.finish(outcome);
	card
}

/// Render a card on the chosen surface, newline-terminated.
pub(crate) fn format_card(card: &ResultCard, format: OutputFormat, style: TextStyle) -> Result<String> {
	let out = match format {
		OutputFormat::Text => render_card_text(card, style),
		OutputFormat::Html => format!("{}\n", render_card_html(card)),
		OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(card).map_err(EchoError::Encode)?),
	};
	Ok(out)
}
