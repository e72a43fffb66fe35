//! Plugin attribution block.
//!
//! A diagram body consisting solely of the `version` directive is a
//! request for engine version info; the emitted markup then carries an
//! attribution block identifying this plugin as well.

use std::sync::LazyLock;

use regex::Regex;

static VERSION_INFO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*@start\w+\s*\n\s*version\s*\n\s*@end\w+\s*$").unwrap());

/// Whether a document is a version-info request.
#[must_use]
pub fn is_version_info(document: &str) -> bool {
    VERSION_INFO.is_match(document)
}

/// Identity of this plugin, for the attribution block.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    /// Plugin display name.
    pub name: String,
    /// Plugin version.
    pub version: String,
    /// Project homepage.
    pub url: String,
}

impl Default for PluginInfo {
    fn default() -> Self {
        Self {
            name: "plantwiki diagram macro".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            url: "https://github.com/plantwiki/plantwiki".to_owned(),
        }
    }
}

impl PluginInfo {
    /// The attribution block markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"plugin-info\">rendered by <a href=\"{}\">{}</a> {}</div>",
            self.url, self.name, self.version
        )
    }
}
