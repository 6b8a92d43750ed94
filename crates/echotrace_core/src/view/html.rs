use std::fmt::Write;

use crate::view::{ActionStatus, DisplayNode, ResultCard};

const LEAF_STYLE: &str = "color: var(--color-text-secondary)";
const LIST_STYLE: &str = "margin: 0; padding-left: 1rem; list-style: disc";
const ITEM_STYLE: &str = "margin: 0.2rem 0";
const ROOT_BLOCK_STYLE: &str = "border-left: none; padding-left: 0";
const NESTED_BLOCK_STYLE: &str = "border-left: 2px solid var(--color-primary); padding-left: 0.75rem";
const ENTRY_STYLE: &str = "margin: 0.25rem 0";
const LABEL_STYLE: &str = "color: var(--color-text); font-weight: 600";
const CARD_STYLE: &str = "border: 2px solid var(--color-primary); border-radius: 0.5rem; background: var(--color-background); color: var(--color-primary); padding: 1rem";
const CARD_HEADER_STYLE: &str = "display: flex; align-items: center; justify-content: space-between; margin-bottom: 0.75rem";
const CARD_TITLE_STYLE: &str = "margin: 0; font-size: 1.25rem; color: var(--color-primary)";
const CARD_ERROR_STYLE: &str = "color: var(--color-accent)";

/// Render a display tree as HTML markup with inline styles.
pub fn render_html(node: &DisplayNode) -> String {
	let mut out = String::new();
	write_html(&mut out, node);
	out
}

fn write_html(out: &mut String, node: &DisplayNode) {
	match node {
		DisplayNode::Placeholder | DisplayNode::Text { .. } => {
			let _ = write!(out, "<span style=\"{LEAF_STYLE}\">{}</span>", escape_html(node.text().unwrap_or_default()));
		}
		DisplayNode::List { items } => {
			let _ = write!(out, "<ul style=\"{LIST_STYLE}\">");
			for item in items {
				let _ = write!(out, "<li data-index=\"{}\" style=\"{ITEM_STYLE}\">", item.index);
				write_html(out, &item.node);
				out.push_str("</li>");
			}
			out.push_str("</ul>");
		}
		DisplayNode::Block { bordered, entries } => {
			let style = if *bordered { NESTED_BLOCK_STYLE } else { ROOT_BLOCK_STYLE };
			let _ = write!(out, "<div style=\"{style}\">");
			for entry in entries {
				let _ = write!(
					out,
					"<div style=\"{ENTRY_STYLE}\"><div style=\"{LABEL_STYLE}\">{}</div><div>",
					escape_html(&entry.label)
				);
				write_html(out, &entry.value);
				out.push_str("</div></div>");
			}
			out.push_str("</div>");
		}
	}
}

/// Render a result card as HTML: heading, status line, then the body tree.
pub fn render_card_html(card: &ResultCard) -> String {
	let mut out = String::new();
	let _ = write!(
		out,
		"<div style=\"{CARD_STYLE}\"><div style=\"{CARD_HEADER_STYLE}\"><h2 style=\"{CARD_TITLE_STYLE}\">{}</h2></div>",
		escape_html(&card.title)
	);
	if let Some(line) = card.status_line() {
		let _ = if card.status == ActionStatus::Error {
			write!(out, "<div style=\"{CARD_ERROR_STYLE}\">{line}</div>")
		} else {
			write!(out, "<div>{line}</div>")
		};
	}
	if let Some(message) = &card.message {
		let _ = write!(out, "<div style=\"{CARD_ERROR_STYLE}\">{}</div>", escape_html(message));
	}
	if let Some(body) = &card.body {
		write_html(&mut out, body);
	}
	out.push_str("</div>");
	out
}

/// Escape text for embedding in HTML element content and attributes.
pub(crate) fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}
