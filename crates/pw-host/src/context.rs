//! Per-request render context types.

/// The page a macro invocation is rendering into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Space key of the page.
    pub space_key: String,
    /// Title of the page.
    pub page_title: String,
}

impl PageContext {
    /// Create a page context.
    #[must_use]
    pub fn new(space_key: impl Into<String>, page_title: impl Into<String>) -> Self {
        Self {
            space_key: space_key.into(),
            page_title: page_title.into(),
        }
    }
}

/// Output device a render targets.
///
/// Vector output (SVG) is only usable on devices with a live browser
/// rendering pipeline; exports and mail clients get raster fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDevice {
    /// Normal page view in the browser.
    Display,
    /// Edit-mode preview.
    Preview,
    /// RSS/Atom feed.
    Feed,
    /// Notification mail.
    Email,
    /// PDF export.
    Pdf,
    /// Word export.
    Word,
    /// Static HTML export.
    HtmlExport,
}

impl OutputDevice {
    /// Whether this device can display vector output.
    #[must_use]
    pub fn supports_vector(self) -> bool {
        matches!(self, Self::Display | Self::Preview | Self::Feed)
    }
}

/// State the host hands to a single macro invocation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Output device for this render.
    pub output: OutputDevice,
    /// Page being rendered. `None` outside a page render (e.g. a comment
    /// or blog export context); the macro rejects those invocations.
    pub page: Option<PageContext>,
    /// Authenticated user, if any.
    pub user: Option<String>,
}

impl RenderContext {
    /// Context for a normal page view.
    #[must_use]
    pub fn display(page: PageContext) -> Self {
        Self {
            output: OutputDevice::Display,
            page: Some(page),
            user: None,
        }
    }

    /// Set the authenticated user.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_support_per_device() {
        assert!(OutputDevice::Display.supports_vector());
        assert!(OutputDevice::Preview.supports_vector());
        assert!(OutputDevice::Feed.supports_vector());
        assert!(!OutputDevice::Email.supports_vector());
        assert!(!OutputDevice::Pdf.supports_vector());
        assert!(!OutputDevice::Word.supports_vector());
        assert!(!OutputDevice::HtmlExport.supports_vector());
    }

    #[test]
    fn test_display_context_carries_page() {
        let ctx = RenderContext::display(PageContext::new("DEV", "Home")).with_user("alice");
        assert_eq!(ctx.output, OutputDevice::Display);
        assert_eq!(ctx.page.unwrap().space_key, "DEV");
        assert_eq!(ctx.user.as_deref(), Some("alice"));
    }
}
