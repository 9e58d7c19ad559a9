use smallvec::SmallVec;

/// The kind of a node in the document tree.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// The document root. Exactly one exists per tree.
    #[default]
    Document,
    /// An element with a tag name, for example `button` or `section`.
    Element { tag: String },
    /// A text run.
    Text { text: String },
}

/// A single node: its kind plus its attributes.
///
/// Most elements on the demo page carry at most an `id`, a `style`, and a
/// `title`, so attributes live inline rather than in a map.
#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

impl DomNode {
    /// Create an element node with the given tag name.
    pub fn element<T: Into<String>>(tag: T) -> Self {
        Self {
            kind: NodeKind::Element { tag: tag.into() },
            attrs: SmallVec::new(),
        }
    }

    /// Create a text node with the given content.
    pub fn text<T: Into<String>>(text: T) -> Self {
        Self {
            kind: NodeKind::Text { text: text.into() },
            attrs: SmallVec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value under the same name.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// The tag name, for element nodes only.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DomNode;

    #[test]
    fn set_attribute_replaces_existing_value() {
        let mut node = DomNode::element("button");
        node.set_attribute("id", "test-button");
        node.set_attribute("id", "other");
        assert_eq!(node.attribute("id"), Some("other"));
        assert_eq!(node.attrs.len(), 1);
    }

    #[test]
    fn text_nodes_have_no_tag() {
        assert_eq!(DomNode::text("hello").tag(), None);
        assert_eq!(DomNode::element("p").tag(), Some("p"));
    }
}
