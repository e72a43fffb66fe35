//! Writable download slots for rendered artifacts.

use std::fmt;
use std::io::Write;

use crate::error::HostError;

/// A writable download slot allocated by the host.
///
/// The macro writes the rendered image into the slot's stream and embeds
/// the slot's URL in the emitted markup. The host owns retention and
/// delivery of the written bytes.
pub struct DownloadHandle {
    writer: Box<dyn Write + Send>,
    url: String,
}

impl DownloadHandle {
    /// Create a handle from a stream and its public URL path.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>, url: impl Into<String>) -> Self {
        Self {
            writer,
            url: url.into(),
        }
    }

    /// The stream to write the artifact into.
    pub fn writer(&mut self) -> &mut (dyn Write + Send) {
        &mut *self.writer
    }

    /// URL path under which the written artifact is served.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for DownloadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadHandle")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Allocates writable download slots.
pub trait DownloadStore: Send + Sync {
    /// Allocate a download slot for the given user.
    ///
    /// `prefix` and `suffix` shape the generated resource name (e.g.
    /// `"diagram"` and `".png"`); the store guarantees uniqueness per call.
    fn create(
        &self,
        user: Option<&str>,
        prefix: &str,
        suffix: &str,
    ) -> Result<DownloadHandle, HostError>;
}
