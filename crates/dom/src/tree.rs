use crate::node::{DomNode, NodeKind};
use crate::style;
use indextree::{Arena, NodeId};

/// The live document tree: an arena of nodes under a single document root.
///
/// Handles (`NodeId`) stay valid for the lifetime of the page; removed nodes
/// simply stop resolving. Every lookup returns `Option` and every mutation
/// on a stale handle is a silent skip, so callers never have to guard.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a tree containing only the document root.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
        }
    }

    /// The document root handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Mint a detached element node. Attach it with [`Self::append_child`].
    pub fn create_element<T: Into<String>>(&mut self, tag: T) -> NodeId {
        self.arena.new_node(DomNode::element(tag))
    }

    /// Mint a detached text node.
    pub fn create_text<T: Into<String>>(&mut self, text: T) -> NodeId {
        self.arena.new_node(DomNode::text(text))
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        // A failed append means a stale handle or a cycle attempt; the page
        // script only ever appends freshly minted nodes, so skip quietly.
        if parent.checked_append(child, &mut self.arena).is_err() {
            log::warn!("append_child skipped: stale node handle");
        }
    }

    /// Borrow a node's data, if the handle still resolves.
    pub fn node(&self, node: NodeId) -> Option<&DomNode> {
        self.arena.get(node).map(indextree::Node::get)
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut DomNode> {
        self.arena.get_mut(node).map(indextree::Node::get_mut)
    }

    /// Read an attribute value.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).and_then(|data| data.attribute(name))
    }

    /// Set an attribute, replacing any existing value. Stale handles skip.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.node_mut(node) {
            data.set_attribute(name, value);
        }
    }

    /// The tag name of an element node.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(DomNode::tag)
    }

    /// First element in document order whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.root.descendants(&self.arena).find(|candidate| {
            self.node(*candidate)
                .is_some_and(|data| data.tag().is_some() && data.attribute("id") == Some(id))
        })
    }

    /// First element matching a selector, in document order.
    ///
    /// Supports the two forms the page script uses: `#id` and a bare tag
    /// name (matched case-insensitively). Anything else resolves to `None`.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        if let Some(id) = selector.strip_prefix('#') {
            return self.element_by_id(id);
        }
        self.root.descendants(&self.arena).find(|candidate| {
            self.tag(*candidate)
                .is_some_and(|tag| tag.eq_ignore_ascii_case(selector))
        })
    }

    /// Direct children of a node, in order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        node.children(&self.arena).collect()
    }

    /// Number of direct children.
    pub fn child_count(&self, node: NodeId) -> usize {
        node.children(&self.arena).count()
    }

    /// Concatenated text of the node and all of its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for current in node.descendants(&self.arena) {
            if let Some(DomNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(current)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace the node's children with a single text child.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        if self.arena.get(node).is_none() {
            return;
        }
        let existing: Vec<NodeId> = node.children(&self.arena).collect();
        for child in existing {
            child.remove_subtree(&mut self.arena);
        }
        let fresh = self.create_text(text);
        self.append_child(node, fresh);
    }

    /// Read one inline style property (from the `style` attribute).
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<String> {
        self.attribute(node, "style")
            .and_then(|inline| style::property(inline, name))
    }

    /// Write one inline style property, preserving the other declarations.
    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str) {
        let current = self.attribute(node, "style").unwrap_or_default();
        let updated = style::with_property(current, name, value);
        self.set_attribute(node, "style", &updated);
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    fn page() -> (Document, indextree::NodeId) {
        let mut doc = Document::new();
        let body = doc.create_element("body");
        doc.append_child(doc.root(), body);
        (doc, body)
    }

    #[test]
    fn element_by_id_finds_first_match() {
        let (mut doc, body) = page();
        let button = doc.create_element("button");
        doc.set_attribute(button, "id", "test-button");
        doc.append_child(body, button);

        assert_eq!(doc.element_by_id("test-button"), Some(button));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn query_selector_matches_tags_and_ids() {
        let (mut doc, body) = page();
        let main = doc.create_element("main");
        doc.set_attribute(main, "id", "content");
        doc.append_child(body, main);

        assert_eq!(doc.query_selector("main"), Some(main));
        assert_eq!(doc.query_selector("MAIN"), Some(main));
        assert_eq!(doc.query_selector("#content"), Some(main));
        assert_eq!(doc.query_selector("section"), None);
    }

    #[test]
    fn set_text_content_replaces_children() {
        let (mut doc, body) = page();
        let heading = doc.create_element("h1");
        doc.append_child(body, heading);
        let old_text = doc.create_text("before");
        doc.append_child(heading, old_text);

        doc.set_text_content(heading, "after");
        assert_eq!(doc.text_content(heading), "after");
        assert_eq!(doc.child_count(heading), 1);
    }

    #[test]
    fn style_properties_round_trip() {
        let (mut doc, body) = page();
        doc.set_style_property(body, "color", "#ff0080");
        doc.set_style_property(body, "padding", "15px");
        doc.set_style_property(body, "color", "#000000");

        assert_eq!(doc.style_property(body, "color").as_deref(), Some("#000000"));
        assert_eq!(doc.style_property(body, "padding").as_deref(), Some("15px"));
        assert_eq!(doc.style_property(body, "display"), None);
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let (mut doc, body) = page();
        let para = doc.create_element("p");
        doc.append_child(body, para);
        let first = doc.create_text("Hello, ");
        let nested = doc.create_element("em");
        let second = doc.create_text("world");
        doc.append_child(para, first);
        doc.append_child(para, nested);
        doc.append_child(nested, second);

        assert_eq!(doc.text_content(para), "Hello, world");
    }
}
