//! Host-shell boundary: the page script's only window on the surrounding
//! browser. Dialogs, reload, and navigation all cross this seam so the
//! script itself stays host-agnostic and testable.

use log::info;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Services the host browser provides to the page script.
pub trait HostShell: Send + Sync {
    /// Present a blocking informational dialog to the user.
    fn alert(&self, message: &str);

    /// Trigger a full reload of the current page. Control does not
    /// meaningfully return to the caller once the reload begins.
    fn reload(&self);

    /// Replace the current location with `url`. No validation is performed;
    /// malformed input is delegated to the host's URL handling.
    fn navigate(&self, url: &str);
}

/// Default shell that routes everything to the `log` crate. This keeps
/// output routing in one place so it can later be swapped for a real
/// dialog and navigation backend.
pub struct LoggingShell;

impl HostShell for LoggingShell {
    fn alert(&self, message: &str) {
        info!("[dialog]: {message}");
    }

    fn reload(&self) {
        info!("[navigation]: reload");
    }

    fn navigate(&self, url: &str) {
        info!("[navigation]: {url}");
    }
}

/// Shell that records every call so tests can assert on the exact dialog
/// texts and navigation targets a handler produced.
#[derive(Default)]
pub struct RecordingShell {
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alert texts presented so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// The most recent alert text, if any.
    pub fn last_alert(&self) -> Option<String> {
        self.alerts().pop()
    }

    /// All navigation targets requested so far.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of reloads requested.
    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::Relaxed)
    }
}

impl HostShell for RecordingShell {
    fn alert(&self, message: &str) {
        if let Ok(mut guard) = self.alerts.lock() {
            guard.push(message.to_string());
        }
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
    }

    fn navigate(&self, url: &str) {
        if let Ok(mut guard) = self.navigations.lock() {
            guard.push(url.to_string());
        }
    }
}
