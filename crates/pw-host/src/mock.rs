//! Mock host implementation for testing.
//!
//! Provides [`MockHost`] for unit testing the macro without a wiki platform.

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::download::{DownloadHandle, DownloadStore};
use crate::error::HostError;
use crate::page::{AttachmentData, GlobalSettings, PageSnapshot, PageSource};

/// In-memory host for testing.
///
/// Implements [`PageSource`], [`GlobalSettings`] and [`DownloadStore`].
/// Use the builder methods to seed pages and attachments; download slots
/// write into shared buffers that tests can read back via
/// [`download`](Self::download).
///
/// # Example
///
/// ```ignore
/// use pw_host::{MockHost, PageSource};
///
/// let host = MockHost::new()
///     .with_page("DEV", "Diagram", "digraph g { a -> b; }");
///
/// assert!(host.page("DEV", "Diagram").is_some());
/// assert!(host.page("DEV", "Missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct MockHost {
    pages: Vec<PageSnapshot>,
    attachments: HashMap<(String, String, String), AttachmentData>,
    base_url: String,
    downloads: Mutex<Vec<(String, Arc<Mutex<Vec<u8>>>)>>,
    counter: AtomicUsize,
}

impl MockHost {
    /// Create an empty mock host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: "http://wiki.example.com".to_owned(),
            ..Self::default()
        }
    }

    /// Seed a page.
    #[must_use]
    pub fn with_page(mut self, space_key: &str, title: &str, body: &str) -> Self {
        self.pages.push(PageSnapshot {
            space_key: space_key.to_owned(),
            title: title.to_owned(),
            body: body.to_owned(),
        });
        self
    }

    /// Seed an attachment on a page.
    #[must_use]
    pub fn with_attachment(
        mut self,
        space_key: &str,
        title: &str,
        file_name: &str,
        data: &[u8],
    ) -> Self {
        self.attachments.insert(
            (space_key.to_owned(), title.to_owned(), file_name.to_owned()),
            AttachmentData {
                file_name: file_name.to_owned(),
                media_type: "text/plain".to_owned(),
                data: data.to_vec(),
            },
        );
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }

    /// Bytes written into the download slot with the given URL, if any.
    #[must_use]
    pub fn download(&self, url: &str) -> Option<Vec<u8>> {
        let downloads = self.downloads.lock().unwrap();
        downloads
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, buf)| buf.lock().unwrap().clone())
    }

    /// URLs of all allocated download slots, in allocation order.
    #[must_use]
    pub fn download_urls(&self) -> Vec<String> {
        let downloads = self.downloads.lock().unwrap();
        downloads.iter().map(|(u, _)| u.clone()).collect()
    }
}

impl PageSource for MockHost {
    fn page(&self, space_key: &str, title: &str) -> Option<PageSnapshot> {
        self.pages
            .iter()
            .find(|p| p.space_key == space_key && p.title == title)
            .cloned()
    }

    fn attachment(&self, space_key: &str, title: &str, file_name: &str) -> Option<AttachmentData> {
        self.attachments
            .get(&(space_key.to_owned(), title.to_owned(), file_name.to_owned()))
            .cloned()
    }

    fn space_exists(&self, space_key: &str) -> bool {
        self.pages.iter().any(|p| p.space_key == space_key)
    }
}

impl GlobalSettings for MockHost {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

/// Writer endpoint of a shared in-memory download buffer.
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl DownloadStore for MockHost {
    fn create(
        &self,
        user: Option<&str>,
        prefix: &str,
        suffix: &str,
    ) -> Result<DownloadHandle, HostError> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let user = user.unwrap_or("anonymous");
        let url = format!("/download/temp/{user}/{prefix}-{n}{suffix}");
        let buf = Arc::new(Mutex::new(Vec::new()));
        self.downloads
            .lock()
            .unwrap()
            .push((url.clone(), Arc::clone(&buf)));
        Ok(DownloadHandle::new(Box::new(SharedBuffer(buf)), url))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_lookup() {
        let host = MockHost::new().with_page("DEV", "Home", "body");
        assert_eq!(host.page("DEV", "Home").unwrap().body, "body");
        assert!(host.page("DEV", "Other").is_none());
        assert!(host.space_exists("DEV"));
        assert!(!host.space_exists("QA"));
    }

    #[test]
    fn test_attachment_lookup() {
        let host = MockHost::new()
            .with_page("DEV", "Home", "")
            .with_attachment("DEV", "Home", "d.puml", b"A -> B");
        let att = host.attachment("DEV", "Home", "d.puml").unwrap();
        assert_eq!(att.data, b"A -> B");
        assert!(host.attachment("DEV", "Home", "missing.puml").is_none());
    }

    #[test]
    fn test_download_slot_roundtrip() {
        let host = MockHost::new();
        let mut handle = host.create(Some("alice"), "diagram", ".png").unwrap();
        handle.writer().write_all(b"\x89PNG").unwrap();
        let url = handle.url().to_owned();
        assert!(url.contains("alice"));
        assert!(url.ends_with(".png"));
        assert_eq!(host.download(&url).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_download_slots_are_unique() {
        let host = MockHost::new();
        let a = host.create(None, "diagram", ".png").unwrap();
        let b = host.create(None, "diagram", ".png").unwrap();
        assert_ne!(a.url(), b.url());
        assert_eq!(host.download_urls().len(), 2);
    }
}
