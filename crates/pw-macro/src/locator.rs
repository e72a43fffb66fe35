//! Resolving cross-references to wiki-hosted diagram source.

use pw_host::{HostError, PageContext, PageSource};
use pw_source::{DiagramSource, DiagramType, LinkError, SourceBuilder, SourceLocator, WikiLink};

/// Locates diagram fragments on wiki pages and attachments.
///
/// Resolves `[space:]pageTitle[#attachmentName]` references against the
/// page currently being rendered: an attachment reference yields the
/// attachment's text, a bare page reference yields the page body with
/// wiki markup stripped. Resolution failures are surfaced, never turned
/// into empty content.
pub struct WikiSourceLocator<'a> {
    pages: &'a dyn PageSource,
    ctx: PageContext,
}

impl<'a> WikiSourceLocator<'a> {
    /// Create a locator for the given page context.
    #[must_use]
    pub fn new(pages: &'a dyn PageSource, ctx: PageContext) -> Self {
        Self { pages, ctx }
    }
}

impl SourceLocator for WikiSourceLocator<'_> {
    fn locate(&self, reference: &str) -> Result<DiagramSource, LinkError> {
        let link = WikiLink::parse(reference, &self.ctx, self.pages)?;

        if let Some(file_name) = &link.attachment_name {
            let attachment = self
                .pages
                .attachment(&link.space_key, &link.page_title, file_name)
                .ok_or_else(|| HostError::AttachmentNotFound {
                    space_key: link.space_key.clone(),
                    page_title: link.page_title.clone(),
                    file_name: file_name.clone(),
                })?;
            let text = attachment.text()?.to_owned();
            return Ok(SourceBuilder::new(DiagramType::Uml).append(&text).build());
        }

        // The page was validated during link parsing.
        let page = self
            .pages
            .page(&link.space_key, &link.page_title)
            .ok_or_else(|| HostError::PageNotFound {
                space_key: link.space_key.clone(),
                page_title: link.page_title.clone(),
            })?;
        Ok(SourceBuilder::new(DiagramType::Uml)
            .append(&page.body_without_markup())
            .build())
    }
}
