use std::fmt::{self, Write};

use crate::view::{DisplayNode, ResultCard};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Emphasis treatment for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
	/// No escape sequences.
	#[default]
	Plain,
	/// Bold labels and dimmed placeholders via ANSI escapes.
	Ansi,
}

impl TextStyle {
	fn label(self, label: &str) -> String {
		match self {
			TextStyle::Plain => label.to_owned(),
			TextStyle::Ansi => format!("{BOLD}{label}{RESET}"),
		}
	}

	fn leaf(self, node: &DisplayNode) -> String {
		let text = node.text().unwrap_or_default();
		match self {
			TextStyle::Ansi if node.is_placeholder() => format!("{DIM}{text}{RESET}"),
			_ => text.to_owned(),
		}
	}
}

/// Render a display tree as indented terminal text.
pub fn render_text(node: &DisplayNode, style: TextStyle) -> String {
	let mut out = String::new();
	// Writing into a String cannot fail.
	let _ = write_node(&mut out, node, style);
	out
}

/// Write a display tree as indented lines.
///
/// Block entries with leaf values print `label: text` on one line; container
/// values start on the next line two columns deeper. Bordered blocks prefix
/// their lines with `| ` and list items start with `- `.
pub fn write_node(out: &mut impl Write, node: &DisplayNode, style: TextStyle) -> fmt::Result {
	write_lines(out, node, "", "", style)
}

fn write_lines(out: &mut impl Write, node: &DisplayNode, first: &str, rest: &str, style: TextStyle) -> fmt::Result {
	match node {
		DisplayNode::Placeholder | DisplayNode::Text { .. } => write_leaf(out, first, &style.leaf(node), rest),
		DisplayNode::List { items } => {
			if items.is_empty() {
				return writeln!(out, "{first}[]");
			}
			let item_rest = format!("{rest}  ");
			for (idx, item) in items.iter().enumerate() {
				let head = if idx == 0 { first } else { rest };
				write_lines(out, &item.node, &format!("{head}- "), &item_rest, style)?;
			}
			Ok(())
		}
		DisplayNode::Block { bordered, entries } => {
			if entries.is_empty() {
				return writeln!(out, "{first}{{}}");
			}
			let (first, rest) = if *bordered {
				(format!("{first}| "), format!("{rest}| "))
			} else {
				(first.to_owned(), rest.to_owned())
			};
			let nested = format!("{rest}  ");
			for (idx, entry) in entries.iter().enumerate() {
				let head = if idx == 0 { &first } else { &rest };
				let label = style.label(&entry.label);
				if entry.value.is_leaf() {
					write_leaf(out, &format!("{head}{label}: "), &style.leaf(&entry.value), &nested)?;
				} else {
					writeln!(out, "{head}{label}:")?;
					write_lines(out, &entry.value, &nested, &nested, style)?;
				}
			}
			Ok(())
		}
	}
}

// Continuation lines of multi-line text keep the surrounding prefix.
fn write_leaf(out: &mut impl Write, head: &str, text: &str, cont: &str) -> fmt::Result {
	let mut lines = text.split('\n');
	writeln!(out, "{head}{}", lines.next().unwrap_or_default())?;
	for line in lines {
		writeln!(out, "{cont}{line}")?;
	}
	Ok(())
}

/// Render a result card: title, status line, then the body tree.
pub fn render_card_text(card: &ResultCard, style: TextStyle) -> String {
	let mut out = String::new();
	let _ = write_card(&mut out, card, style);
	out
}

fn write_card(out: &mut impl Write, card: &ResultCard, style: TextStyle) -> fmt::Result {
	writeln!(out, "== {} ==", style.label(&card.title))?;
	if let Some(line) = card.status_line() {
		writeln!(out, "{line}")?;
	}
	if let Some(message) = &card.message {
		writeln!(out, "{message}")?;
	}
	if let Some(body) = &card.body {
		write_node(out, body, style)?;
	}
	Ok(())
}
