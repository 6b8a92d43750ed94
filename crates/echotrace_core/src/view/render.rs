use crate::view::{BlockEntry, DisplayNode, ListItem, StructuredValue};

/// Render a structured value at the traversal root.
pub fn render_root(value: &StructuredValue) -> DisplayNode {
	render(value, 0)
}

/// Render a structured value into a display tree at the given nesting depth.
///
/// Null is checked before containers, and sequences before mappings, so an
/// empty list never renders as a placeholder or a block. Children render at
/// `depth + 1`; the depth only decides whether a block carries a border.
pub fn render(value: &StructuredValue, depth: u32) -> DisplayNode {
	match value {
		StructuredValue::Null => DisplayNode::Placeholder,
		StructuredValue::Sequence(items) => DisplayNode::List {
			items: items
				.iter()
				.enumerate()
				.map(|(index, item)| ListItem {
					index,
					node: render(item, depth.saturating_add(1)),
				})
				.collect(),
		},
		StructuredValue::Mapping(entries) => DisplayNode::Block {
			bordered: depth > 0,
			entries: entries
				.iter()
				.map(|entry| BlockEntry {
					label: entry.key.clone(),
					value: render(&entry.value, depth.saturating_add(1)),
				})
				.collect(),
		},
		StructuredValue::Primitive(primitive) => DisplayNode::Text {
			text: primitive.canonical_text(),
		},
	}
}
