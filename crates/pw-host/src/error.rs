//! Error type for host platform lookups.

/// Error from host platform collaborators.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HostError {
    /// A referenced space does not exist.
    #[error("space '{space_key}' not found")]
    SpaceNotFound {
        /// The unknown space key.
        space_key: String,
    },

    /// A referenced page does not exist.
    #[error("page '{page_title}' not found in space '{space_key}'")]
    PageNotFound {
        /// Space key of the missing page.
        space_key: String,
        /// Title of the missing page.
        page_title: String,
    },

    /// A referenced attachment does not exist on the resolved page.
    #[error("attachment '{file_name}' not found on page '{page_title}' in space '{space_key}'")]
    AttachmentNotFound {
        /// Space key of the page.
        space_key: String,
        /// Title of the page.
        page_title: String,
        /// File name of the missing attachment.
        file_name: String,
    },

    /// Attachment content is not valid UTF-8.
    #[error("attachment '{file_name}' is not valid UTF-8 text")]
    InvalidEncoding {
        /// File name of the attachment.
        file_name: String,
    },

    /// I/O error writing a download slot.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
