use serde::Serialize;

/// Text shown for null and absent values.
pub const PLACEHOLDER_TEXT: &str = "null";

/// Rendered display tree for one structured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayNode {
	/// De-emphasized `null` leaf.
	Placeholder,
	/// Primitive leaf.
	Text {
		/// Canonical text of the primitive.
		text: String,
	},
	/// List container, one item per sequence element.
	List {
		/// Items in source order.
		items: Vec<ListItem>,
	},
	/// Key/value block container.
	Block {
		/// Left border and padding nesting the block under its parent.
		bordered: bool,
		/// Entries in source key order.
		entries: Vec<BlockEntry>,
	},
}

/// One element of a list container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
	/// Positional index, a stable rendering key that is never displayed.
	pub index: usize,
	/// Rendered element.
	pub node: DisplayNode,
}

/// One labeled entry of a block container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockEntry {
	/// Emphasized key label.
	pub label: String,
	/// Rendered value beneath the label.
	pub value: DisplayNode,
}

impl DisplayNode {
	/// Leaf text, or `None` for containers.
	pub fn text(&self) -> Option<&str> {
		match self {
			DisplayNode::Placeholder => Some(PLACEHOLDER_TEXT),
			DisplayNode::Text { text } => Some(text),
			DisplayNode::List { .. } | DisplayNode::Block { .. } => None,
		}
	}

	/// Whether this node has no children by construction.
	pub fn is_leaf(&self) -> bool {
		matches!(self, DisplayNode::Placeholder | DisplayNode::Text { .. })
	}

	/// Whether this node is the de-emphasized placeholder.
	pub fn is_placeholder(&self) -> bool {
		matches!(self, DisplayNode::Placeholder)
	}

	/// Number of direct children (list items or block entries).
	pub fn child_count(&self) -> usize {
		match self {
			DisplayNode::Placeholder | DisplayNode::Text { .. } => 0,
			DisplayNode::List { items } => items.len(),
			DisplayNode::Block { entries, .. } => entries.len(),
		}
	}

	/// Find a block entry's value by label.
	pub fn entry(&self, label: &str) -> Option<&DisplayNode> {
		match self {
			DisplayNode::Block { entries, .. } => entries.iter().find(|entry| entry.label == label).map(|entry| &entry.value),
			_ => None,
		}
	}
}
