//! Page behavior for the SCos browser demo page.
//!
//! This crate is the native rendition of the demo page's script: a flat set
//! of independent handlers that mutate the live document tree, a few utility
//! functions callable from markup, load-time initialization, and a one-shot
//! deferred demo load. Handlers run to completion on the event-loop thread;
//! the deferred load is the only suspension point.
//!
//! The surrounding page owns the markup and supplies the element ids the
//! script depends on. Every handler is a silent no-op when its target
//! element is missing.

pub mod deferred;
pub mod handlers;
pub mod host;
pub mod info;
pub mod page;
pub mod utilities;

pub use host::{HostShell, LoggingShell, RecordingShell};
pub use page::{ClickHandler, Page};
