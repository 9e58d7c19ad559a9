//! Page wiring: click-listener registry and load-time initialization.

use crate::handlers;
use crate::host::HostShell;
use dom::{Document, NodeId, printing};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

/// A click handler bound to an element. Handlers are stateless free
/// functions, so plain fn pointers keep the registry cheap to copy out of.
pub type ClickHandler = fn(&mut Document, &dyn HostShell);

/// One displayed page: its document tree, its host shell, and the listeners
/// the script has registered. All dispatch runs to completion on the
/// caller's thread; there is no concurrent mutation of the tree.
pub struct Page {
    document: Document,
    shell: Arc<dyn HostShell>,
    click_listeners: HashMap<NodeId, ClickHandler>,
    ready_fired: bool,
}

impl Page {
    pub fn new(document: Document, shell: Arc<dyn HostShell>) -> Self {
        Self {
            document,
            shell,
            click_listeners: HashMap::new(),
            ready_fired: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn shell(&self) -> &dyn HostShell {
        self.shell.as_ref()
    }

    /// Register `handler` to run when `node` is clicked, replacing any
    /// previous listener for that node.
    pub fn add_click_listener(&mut self, node: NodeId, handler: ClickHandler) {
        self.click_listeners.insert(node, handler);
    }

    /// Whether a click listener is registered for `node`.
    pub fn has_click_listener(&self, node: NodeId) -> bool {
        self.click_listeners.contains_key(&node)
    }

    /// One-shot document-ready hook, fired by the host once the page's
    /// structural content has finished parsing. Repeat invocations are
    /// ignored. Logs the load diagnostic and, when the main title exists,
    /// makes it an interactive restyle trigger.
    pub fn document_ready(&mut self) {
        if self.ready_fired {
            return;
        }
        self.ready_fired = true;
        info!("SCos Browser script loaded successfully!");
        debug!("document tree at ready:\n{}", printing::dump(&self.document));

        if let Some(title) = self.document.element_by_id(handlers::MAIN_TITLE_ID) {
            self.add_click_listener(title, handlers::restyle_heading);
            self.document.set_style_property(title, "cursor", "pointer");
            self.document
                .set_attribute(title, "title", "Click to change style");
        }
    }

    /// Deliver a click to `node`, running its registered handler to
    /// completion. No-op when nothing is registered for the node.
    pub fn dispatch_click(&mut self, node: NodeId) {
        if let Some(handler) = self.click_listeners.get(&node).copied() {
            handler(&mut self.document, self.shell.as_ref());
        }
    }
}
