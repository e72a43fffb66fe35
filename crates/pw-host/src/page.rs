//! Page and attachment lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::HostError;

// Wiki markup stripped from page bodies before they are used as diagram
// source: {macro} braces, [link|label] brackets and heading prefixes.
static MACRO_BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-zA-Z][a-zA-Z0-9:=\-. ]*\}").unwrap());
static LINK_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]|]*)(?:\|[^\]]*)?\]").unwrap());
static HEADING_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^h[1-6]\. ").unwrap());

/// Snapshot of a wiki page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Space key the page lives in.
    pub space_key: String,
    /// Page title.
    pub title: String,
    /// Raw page body in wiki markup.
    pub body: String,
}

impl PageSnapshot {
    /// Page body with wiki markup stripped.
    ///
    /// Used when a cross-reference names a page without an attachment: the
    /// page text itself is the diagram source, so macro braces, link markup
    /// and heading prefixes must not leak into the diagram document.
    #[must_use]
    pub fn body_without_markup(&self) -> String {
        let stripped = MACRO_BRACES.replace_all(&self.body, "");
        let stripped = LINK_BRACKETS.replace_all(&stripped, "$1");
        HEADING_PREFIX.replace_all(&stripped, "").into_owned()
    }
}

/// An attachment's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentData {
    /// File name of the attachment.
    pub file_name: String,
    /// MIME type reported by the host.
    pub media_type: String,
    /// Raw content bytes.
    pub data: Vec<u8>,
}

impl AttachmentData {
    /// Interpret the attachment content as UTF-8 text.
    pub fn text(&self) -> Result<&str, HostError> {
        std::str::from_utf8(&self.data).map_err(|_| HostError::InvalidEncoding {
            file_name: self.file_name.clone(),
        })
    }
}

/// Page and attachment lookup by space key and title.
pub trait PageSource: Send + Sync {
    /// Look up a page. Returns `None` if the page does not exist.
    fn page(&self, space_key: &str, title: &str) -> Option<PageSnapshot>;

    /// Look up an attachment on a page. Returns `None` if either the page
    /// or the attachment does not exist.
    fn attachment(&self, space_key: &str, title: &str, file_name: &str) -> Option<AttachmentData>;

    /// Whether a space with the given key exists.
    fn space_exists(&self, space_key: &str) -> bool;
}

/// Installation-wide settings.
pub trait GlobalSettings: Send + Sync {
    /// Base URL of the wiki installation.
    fn base_url(&self) -> String;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(body: &str) -> PageSnapshot {
        PageSnapshot {
            space_key: "DEV".to_owned(),
            title: "Diagram".to_owned(),
            body: body.to_owned(),
        }
    }

    #[test]
    fn test_plain_body_unchanged() {
        let p = page("digraph g {\n  a -> b;\n}");
        assert_eq!(p.body_without_markup(), "digraph g {\n  a -> b;\n}");
    }

    #[test]
    fn test_macro_braces_stripped() {
        let p = page("{noformat}\nAlice -> Bob\n{noformat}");
        assert_eq!(p.body_without_markup(), "\nAlice -> Bob\n");
    }

    #[test]
    fn test_link_markup_unwrapped() {
        let p = page("see [Other Page|DEV:Other] and [Plain]");
        assert_eq!(p.body_without_markup(), "see Other Page and Plain");
    }

    #[test]
    fn test_heading_prefix_stripped() {
        let p = page("h1. Title\nbody");
        assert_eq!(p.body_without_markup(), "Title\nbody");
    }

    #[test]
    fn test_attachment_text_utf8() {
        let att = AttachmentData {
            file_name: "d.puml".to_owned(),
            media_type: "text/plain".to_owned(),
            data: b"A -> B".to_vec(),
        };
        assert_eq!(att.text().unwrap(), "A -> B");
    }

    #[test]
    fn test_attachment_text_invalid_utf8() {
        let att = AttachmentData {
            file_name: "d.bin".to_owned(),
            media_type: "application/octet-stream".to_owned(),
            data: vec![0xff, 0xfe, 0x00],
        };
        assert!(matches!(
            att.text(),
            Err(HostError::InvalidEncoding { file_name }) if file_name == "d.bin"
        ));
    }
}
