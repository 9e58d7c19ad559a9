//! Free utility functions callable from page markup.

use crate::host::HostShell;
use dom::Document;

/// Present an informational dialog with the fixed `SCos Alert: ` prefix.
/// Any text is accepted, including the empty string.
pub fn show_message(shell: &dyn HostShell, text: &str) {
    shell.alert(&format!("SCos Alert: {text}"));
}

/// Flip an element between hidden and shown based on its inline `display`
/// value. Exactly the string `none` counts as hidden; anything else,
/// including an unset property, counts as shown and toggles to `none`.
/// Unknown ids are a no-op.
pub fn toggle_visibility(document: &mut Document, id: &str) {
    let Some(element) = document.element_by_id(id) else {
        return;
    };
    let next = if document.style_property(element, "display").as_deref() == Some("none") {
        "block"
    } else {
        "none"
    };
    document.set_style_property(element, "display", next);
}

/// Trigger a full reload of the current page.
pub fn reload_page(shell: &dyn HostShell) {
    shell.reload();
}

/// Replace the current location with `url`. The caller supplies a
/// well-formed address; nothing is validated here.
pub fn navigate_to_page(shell: &dyn HostShell, url: &str) {
    shell.navigate(url);
}

/// Greeting line for the given user, defaulting to `User`.
pub fn greet_user(name: Option<&str>) -> String {
    format!("Hello, {}! Welcome to SCos Browser.", name.unwrap_or("User"))
}
