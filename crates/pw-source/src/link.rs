//! Cross-reference parsing.
//!
//! A cross-reference points at diagram source hosted elsewhere in the
//! wiki, using the textual grammar `[space:]pageTitle[#attachmentName]`.

use pw_host::{HostError, PageContext, PageSource};

/// Error parsing or resolving a cross-reference.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The reference string does not match the grammar.
    #[error("malformed reference '{0}'")]
    Malformed(String),

    /// The referenced page or attachment does not exist.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// A parsed cross-reference to a diagram fragment on another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLink {
    /// Space key, resolved against the current page when the reference
    /// omits it.
    pub space_key: String,
    /// Title of the referenced page.
    pub page_title: String,
    /// Attachment on the referenced page, if the reference names one.
    pub attachment_name: Option<String>,
}

impl WikiLink {
    /// Parse and validate a reference against the current page context.
    ///
    /// The referenced page must exist; a dangling reference is an error,
    /// never an empty source. Attachment existence is checked later, at
    /// content retrieval.
    pub fn parse(
        reference: &str,
        ctx: &PageContext,
        pages: &dyn PageSource,
    ) -> Result<Self, LinkError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(LinkError::Malformed(reference.to_owned()));
        }

        let (target, attachment_name) = match reference.split_once('#') {
            Some((target, attachment)) if !attachment.is_empty() => {
                (target, Some(attachment.to_owned()))
            }
            Some(_) => return Err(LinkError::Malformed(reference.to_owned())),
            None => (reference, None),
        };

        let (space_key, page_title) = match target.split_once(':') {
            Some((space, title)) => (space.to_owned(), title),
            None => (ctx.space_key.clone(), target),
        };
        if page_title.is_empty() || space_key.is_empty() {
            return Err(LinkError::Malformed(reference.to_owned()));
        }

        if !pages.space_exists(&space_key) {
            return Err(HostError::SpaceNotFound { space_key }.into());
        }
        if pages.page(&space_key, page_title).is_none() {
            return Err(HostError::PageNotFound {
                space_key,
                page_title: page_title.to_owned(),
            }
            .into());
        }

        let link = Self {
            space_key,
            page_title: page_title.to_owned(),
            attachment_name,
        };
        tracing::debug!(reference = %reference, link = ?link, "resolved cross-reference");
        Ok(link)
    }

    /// Whether the reference names an attachment.
    #[must_use]
    pub fn has_attachment(&self) -> bool {
        self.attachment_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pw_host::MockHost;

    use super::*;

    fn host() -> MockHost {
        MockHost::new()
            .with_page("DEV", "Current", "current body")
            .with_page("DEV", "Fragments", "fragment body")
            .with_page("QA", "Fixtures", "fixture body")
    }

    fn ctx() -> PageContext {
        PageContext::new("DEV", "Current")
    }

    #[test]
    fn test_page_only_reference_uses_current_space() {
        let link = WikiLink::parse("Fragments", &ctx(), &host()).unwrap();
        assert_eq!(link.space_key, "DEV");
        assert_eq!(link.page_title, "Fragments");
        assert_eq!(link.attachment_name, None);
        assert!(!link.has_attachment());
    }

    #[test]
    fn test_space_qualified_reference() {
        let link = WikiLink::parse("QA:Fixtures", &ctx(), &host()).unwrap();
        assert_eq!(link.space_key, "QA");
        assert_eq!(link.page_title, "Fixtures");
    }

    #[test]
    fn test_attachment_reference() {
        let link = WikiLink::parse("Fragments#base.puml", &ctx(), &host()).unwrap();
        assert_eq!(link.attachment_name.as_deref(), Some("base.puml"));
        assert!(link.has_attachment());
    }

    #[test]
    fn test_full_reference() {
        let link = WikiLink::parse("QA:Fixtures#net.dot", &ctx(), &host()).unwrap();
        assert_eq!(link.space_key, "QA");
        assert_eq!(link.page_title, "Fixtures");
        assert_eq!(link.attachment_name.as_deref(), Some("net.dot"));
    }

    #[test]
    fn test_missing_page_is_reported() {
        let err = WikiLink::parse("Nowhere", &ctx(), &host()).unwrap_err();
        match err {
            LinkError::Host(HostError::PageNotFound {
                space_key,
                page_title,
            }) => {
                assert_eq!(space_key, "DEV");
                assert_eq!(page_title, "Nowhere");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_space_is_reported() {
        let err = WikiLink::parse("NOPE:Fragments", &ctx(), &host()).unwrap_err();
        assert!(matches!(
            err,
            LinkError::Host(HostError::SpaceNotFound { space_key }) if space_key == "NOPE"
        ));
    }

    #[test]
    fn test_malformed_references() {
        assert!(matches!(
            WikiLink::parse("", &ctx(), &host()),
            Err(LinkError::Malformed(_))
        ));
        assert!(matches!(
            WikiLink::parse("Fragments#", &ctx(), &host()),
            Err(LinkError::Malformed(_))
        ));
        assert!(matches!(
            WikiLink::parse(":Fragments", &ctx(), &host()),
            Err(LinkError::Malformed(_))
        ));
        assert!(matches!(
            WikiLink::parse("DEV:", &ctx(), &host()),
            Err(LinkError::Malformed(_))
        ));
    }

    #[test]
    fn test_reference_is_trimmed() {
        let link = WikiLink::parse("  Fragments \n", &ctx(), &host()).unwrap();
        assert_eq!(link.page_title, "Fragments");
    }
}
