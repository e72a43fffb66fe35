//! Host platform collaborator interfaces for the plantwiki macro.
//!
//! The macro never talks to the wiki platform directly. Everything it needs
//! from the host is expressed as a narrow trait in this crate:
//! - [`PageSource`]: page and attachment lookup by space key and title
//! - [`GlobalSettings`]: installation-wide settings (base URL)
//! - [`DownloadStore`]: writable download slots for rendered artifacts
//!
//! [`RenderContext`] carries the per-request state the host hands to a macro
//! invocation: the output device, the page being rendered and the
//! authenticated user.
//!
//! The `mock` feature provides [`MockHost`], an in-memory implementation of
//! all three traits for unit testing.

mod context;
mod download;
mod error;
mod page;

#[cfg(feature = "mock")]
mod mock;

pub use context::{OutputDevice, PageContext, RenderContext};
pub use download::{DownloadHandle, DownloadStore};
pub use error::HostError;
pub use page::{AttachmentData, GlobalSettings, PageSnapshot, PageSource};

#[cfg(feature = "mock")]
pub use mock::MockHost;
