//! Clickable-region data for a rendered diagram.

use std::sync::LazyLock;

use regex::Regex;

static MAP_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<map[^>]*\b(?:id|name)="([^"]+)""#).unwrap());

/// The image map emitted by the rendering engine alongside the bitmap.
///
/// Wraps the engine's `<map>` HTML verbatim. Diagrams without links
/// produce an empty map; such maps are not embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMap {
    html: String,
}

impl ImageMap {
    /// Wrap the engine's raw map output.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// An empty map (diagram without clickable regions).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            html: String::new(),
        }
    }

    /// Whether the map contains any clickable region markup.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.html.contains("<map")
    }

    /// Identifier of the map element, for the `usemap` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        MAP_ID
            .captures(&self.html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The raw `<map>` block.
    #[must_use]
    pub fn as_html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CMAP: &str = r#"<map id="plantuml_map" name="plantuml_map">
<area shape="rect" id="id1" href="http://wiki.example.com/x" coords="64,95,139,132"/>
</map>"#;

    #[test]
    fn test_valid_map() {
        let map = ImageMap::new(CMAP);
        assert!(map.is_valid());
        assert_eq!(map.id(), Some("plantuml_map"));
        assert_eq!(map.as_html(), CMAP);
    }

    #[test]
    fn test_empty_map_is_invalid() {
        let map = ImageMap::empty();
        assert!(!map.is_valid());
        assert_eq!(map.id(), None);
    }

    #[test]
    fn test_whitespace_only_map_is_invalid() {
        assert!(!ImageMap::new("\n").is_valid());
    }

    #[test]
    fn test_name_only_attribute() {
        let map = ImageMap::new(r#"<map name="m1"><area/></map>"#);
        assert_eq!(map.id(), Some("m1"));
    }
}
