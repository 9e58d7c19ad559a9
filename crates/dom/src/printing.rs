//! Indented tree dump for diagnostics and test output.

use crate::node::NodeKind;
use crate::tree::Document;
use indextree::NodeId;
use std::fmt::Write as _;

/// Render the whole tree as indented pseudo-markup, one node per line.
/// Pure-whitespace text nodes are skipped for cleaner output.
pub fn dump(document: &Document) -> String {
    let mut out = String::new();
    dump_node(document, document.root(), 0, &mut out);
    out
}

fn dump_node(document: &Document, node: NodeId, depth: usize, out: &mut String) {
    let Some(data) = document.node(node) else {
        return;
    };
    let indent = "  ".repeat(depth);
    match &data.kind {
        NodeKind::Document => {
            let _ = writeln!(out, "{indent}#document");
        }
        NodeKind::Element { tag } => {
            let _ = write!(out, "{indent}<{}", tag.to_lowercase());
            let mut attrs: Vec<&(String, String)> = data.attrs.iter().collect();
            attrs.sort_by(|left, right| left.0.cmp(&right.0));
            for (name, value) in attrs {
                let _ = write!(out, " {name}=\"{value}\"");
            }
            let _ = writeln!(out, ">");
        }
        NodeKind::Text { text } => {
            if text.chars().all(char::is_whitespace) {
                return;
            }
            let _ = writeln!(out, "{indent}\"{}\"", text.escape_default());
        }
    }
    let next_depth = match data.kind {
        NodeKind::Text { .. } => depth,
        NodeKind::Document | NodeKind::Element { .. } => depth + 1,
    };
    for child in document.children(node) {
        dump_node(document, child, next_depth, out);
    }
}
