//! Inline style declarations, as stored in the `style` attribute.
//!
//! The page script only needs single-property reads and writes over the
//! `name: value; name: value` declaration form, so this stays a string-level
//! helper rather than a parsed stylesheet model.

/// Split an inline declaration block into `(name, value)` pairs.
///
/// Malformed fragments (no colon, empty name) are dropped rather than
/// reported; the script treats the attribute as best-effort.
pub fn declarations(inline: &str) -> Vec<(String, String)> {
    inline
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim();
            let value = value.trim();
            (!name.is_empty()).then(|| (name.to_string(), value.to_string()))
        })
        .collect()
}

/// Read one property value from an inline declaration block.
pub fn property(inline: &str, name: &str) -> Option<String> {
    declarations(inline)
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Return the declaration block with `name` set to `value`, replacing any
/// existing declaration for the same property and keeping the rest intact.
pub fn with_property(inline: &str, name: &str, value: &str) -> String {
    let mut declarations = declarations(inline);
    if let Some(entry) = declarations
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        entry.1 = value.to_string();
    } else {
        declarations.push((name.to_string(), value.to_string()));
    }
    serialize(&declarations)
}

fn serialize(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
