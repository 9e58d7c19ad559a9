//! Static browser descriptor, created once at load time and immutable for
//! the life of the page.

/// Name, version, and supported feature labels of the hosting browser.
#[derive(Debug, Clone, Copy)]
pub struct BrowserInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub features: &'static [&'static str],
}

/// The descriptor for this browser build.
pub const BROWSER_INFO: BrowserInfo = BrowserInfo {
    name: "SCos Browser",
    version: "1.0",
    features: &["HTML5", "CSS3", "JavaScript ES6+", "File System Access"],
};

/// Format a descriptor as the two-line summary shown in diagnostics:
/// name and version, then the comma-joined feature list.
pub fn display_info(info: &BrowserInfo) -> String {
    format!(
        "{} v{}\nFeatures: {}",
        info.name,
        info.version,
        info.features.join(", ")
    )
}
