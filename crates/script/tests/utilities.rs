use dom::Document;
use script::RecordingShell;
use script::info::{BROWSER_INFO, display_info};
use script::utilities::{
    greet_user, navigate_to_page, reload_page, show_message, toggle_visibility,
};

fn doc_with_element(id: &str) -> (Document, dom::NodeId) {
    let mut doc = Document::new();
    let element = doc.create_element("div");
    doc.set_attribute(element, "id", id);
    doc.append_child(doc.root(), element);
    (doc, element)
}

#[test]
fn show_message_uses_the_fixed_prefix() {
    let shell = RecordingShell::new();
    show_message(&shell, "X");
    show_message(&shell, "");
    assert_eq!(shell.alerts(), vec!["SCos Alert: X", "SCos Alert: "]);
}

#[test]
fn toggle_visibility_shows_hidden_elements() {
    let (mut doc, element) = doc_with_element("panel");
    doc.set_style_property(element, "display", "none");

    toggle_visibility(&mut doc, "panel");

    assert_eq!(doc.style_property(element, "display").as_deref(), Some("block"));
}

#[test]
fn toggle_visibility_hides_anything_else() {
    let (mut doc, element) = doc_with_element("panel");

    // Unset display counts as shown.
    toggle_visibility(&mut doc, "panel");
    assert_eq!(doc.style_property(element, "display").as_deref(), Some("none"));

    doc.set_style_property(element, "display", "flex");
    toggle_visibility(&mut doc, "panel");
    assert_eq!(doc.style_property(element, "display").as_deref(), Some("none"));
}

#[test]
fn toggle_visibility_twice_restores_the_classification() {
    let (mut doc, element) = doc_with_element("panel");
    doc.set_style_property(element, "display", "none");

    toggle_visibility(&mut doc, "panel");
    toggle_visibility(&mut doc, "panel");

    assert_eq!(doc.style_property(element, "display").as_deref(), Some("none"));
}

#[test]
fn toggle_visibility_ignores_unknown_ids() {
    let (mut doc, element) = doc_with_element("panel");

    toggle_visibility(&mut doc, "missing");

    assert_eq!(doc.style_property(element, "display"), None);
}

#[test]
fn reload_and_navigate_forward_to_the_shell() {
    let shell = RecordingShell::new();
    reload_page(&shell);
    navigate_to_page(&shell, "scos://home");

    assert_eq!(shell.reload_count(), 1);
    assert_eq!(shell.navigations(), vec!["scos://home"]);
}

#[test]
fn greet_user_defaults_to_user() {
    assert_eq!(
        greet_user(Some("Ada")),
        "Hello, Ada! Welcome to SCos Browser."
    );
    assert_eq!(greet_user(None), "Hello, User! Welcome to SCos Browser.");
}

#[test]
fn display_info_summarizes_the_descriptor() {
    assert_eq!(
        display_info(&BROWSER_INFO),
        "SCos Browser v1.0\nFeatures: HTML5, CSS3, JavaScript ES6+, File System Access"
    );
}
