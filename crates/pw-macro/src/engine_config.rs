//! Engine configuration lines derived from macro parameters.

use crate::params::MacroParams;

/// Build the configuration lines prepended to the document by the
/// rendering engine.
///
/// Only deviations from engine defaults are emitted: shadows and
/// element separation are on unless switched off, and a title line is
/// added only when the `title` parameter is set.
#[must_use]
pub fn config_lines(params: &MacroParams<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = params.title() {
        if !title.is_empty() {
            lines.push(format!("title {title}"));
        }
    }
    if !params.drop_shadow() {
        lines.push("skinparam shadowing false".to_owned());
    }
    if !params.separation() {
        lines.push("skinparam style strictuml".to_owned());
    }
    lines
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_defaults_produce_no_config() {
        let map = params(&[]);
        assert!(config_lines(&MacroParams::new(&map)).is_empty());
    }

    #[test]
    fn test_title_line() {
        let map = params(&[("title", "System Context")]);
        assert_eq!(
            config_lines(&MacroParams::new(&map)),
            ["title System Context"]
        );
    }

    #[test]
    fn test_disabled_flags() {
        let map = params(&[("dropshadow", "false"), ("separation", "false")]);
        assert_eq!(
            config_lines(&MacroParams::new(&map)),
            ["skinparam shadowing false", "skinparam style strictuml"]
        );
    }

    #[test]
    fn test_empty_title_omitted() {
        let map = params(&[("title", "")]);
        assert!(config_lines(&MacroParams::new(&map)).is_empty());
    }
}
