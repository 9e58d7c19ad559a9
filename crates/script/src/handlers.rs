//! The four user-facing interaction handlers of the demo page.
//!
//! Each handler is self-contained: it looks up its target element, mutates
//! the tree or raises a dialog, and returns. A missing target is always a
//! silent no-op, never an error.

use crate::host::HostShell;
use dom::Document;

/// Id of the demo button whose label and color change on feedback.
pub const TEST_BUTTON_ID: &str = "test-button";
/// Id of the text input read by [`report_input_text`].
pub const TEXT_INPUT_ID: &str = "text-input";
/// Id of the page heading restyled on click.
pub const MAIN_TITLE_ID: &str = "main-title";
/// Selector for the primary content container.
pub const MAIN_SELECTOR: &str = "main";

/// Greet the user with a fixed dialog, then mark the test button as clicked
/// by relabeling it and turning its background red.
pub fn show_test_feedback(document: &mut Document, shell: &dyn HostShell) {
    shell.alert(
        "Hello from SCos Browser!\n\nThis demonstrates script execution in the SCos web browser.",
    );
    if let Some(button) = document.element_by_id(TEST_BUTTON_ID) {
        document.set_text_content(button, "Clicked!");
        document.set_style_property(button, "background-color", "#ff0000");
    }
}

/// Report the text input's current value in a dialog, or prompt for input
/// when the value is empty. A missing input falls through to the prompt.
pub fn report_input_text(document: &Document, shell: &dyn HostShell) {
    let value = document
        .element_by_id(TEXT_INPUT_ID)
        .and_then(|input| document.attribute(input, "value"));
    match value {
        Some(text) if !text.is_empty() => shell.alert(&format!("You entered: {text}")),
        _ => shell.alert("Please enter some text first!"),
    }
}

/// Recolor the main heading and swap in the activation announcement.
/// Registered as the heading's click handler at document ready.
pub fn restyle_heading(document: &mut Document, _shell: &dyn HostShell) {
    if let Some(title) = document.element_by_id(MAIN_TITLE_ID) {
        document.set_style_property(title, "color", "#ff0080");
        document.set_text_content(title, "SCos Browser - Script Active!");
    }
}

/// Build a styled section with a fixed heading and paragraph and append it
/// as the last child of the main container. Each call appends a fresh,
/// independent section.
pub fn append_dynamic_section(document: &mut Document, _shell: &dyn HostShell) {
    let Some(main) = document.query_selector(MAIN_SELECTOR) else {
        return;
    };
    let section = document.create_element("section");
    let heading = document.create_element("h3");
    document.set_text_content(heading, "Dynamic Content");
    let paragraph = document.create_element("p");
    document.set_text_content(paragraph, "This content was added by the page script!");
    document.append_child(section, heading);
    document.append_child(section, paragraph);
    document.set_style_property(section, "background-color", "#008080");
    document.set_style_property(section, "padding", "15px");
    document.set_style_property(section, "margin-top", "20px");
    document.append_child(main, section);
}
