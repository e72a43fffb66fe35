//! Diagram source assembly and include preprocessing.
//!
//! A macro body is raw diagram text. Before it can be handed to the
//! rendering engine it must become a well-formed diagram document:
//! - [`DiagramType`]: the supported diagram languages and their
//!   start/end markers
//! - [`SourceBuilder`]: normalizes a body into a marker-delimited
//!   [`DiagramSource`], wrapping it exactly once
//! - [`WikiLink`]: the `[space:]pageTitle[#attachmentName]` cross-reference
//!   grammar, resolved against the current page context
//! - [`Preprocessor`]: expands `!include` directives by pulling fragments
//!   from other pages or attachments via a [`SourceLocator`], collecting
//!   non-fatal problems instead of aborting

mod builder;
mod diagram_type;
mod link;
mod preprocess;

pub use builder::{DiagramSource, SourceBuilder};
pub use diagram_type::DiagramType;
pub use link::{LinkError, WikiLink};
pub use preprocess::{
    DEFAULT_MAX_DEPTH, PreprocessError, PreprocessOutcome, Preprocessor, SourceLocator,
};
