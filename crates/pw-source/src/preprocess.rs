//! Include expansion over diagram source.
//!
//! Scans a diagram document for `!include <reference>` directives and
//! splices in the referenced fragments, producing one normalized document.
//! Problems with individual includes are collected, not thrown: a
//! partially broken document still renders, with the failures reported
//! alongside.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::builder::DiagramSource;
use crate::link::LinkError;

static INCLUDE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)!include\s+(.+)$").unwrap());

/// Default bound on nested include expansion.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Locates the diagram source a cross-reference points at.
///
/// The seam between include expansion and the host platform: the macro
/// supplies an implementation that resolves references against wiki
/// pages and attachments.
pub trait SourceLocator: Send + Sync {
    /// Resolve a reference to its diagram source.
    fn locate(&self, reference: &str) -> Result<DiagramSource, LinkError>;
}

/// A non-fatal problem found while expanding includes.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    /// The referenced fragment could not be resolved.
    #[error("cannot resolve include '{reference}': {source}")]
    Unresolved {
        /// The reference as written in the directive.
        reference: String,
        /// Why resolution failed.
        #[source]
        source: LinkError,
    },

    /// The reference is part of an include cycle.
    #[error("circular include of '{reference}'")]
    CircularInclude {
        /// The reference that closed the cycle.
        reference: String,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("include depth limit of {limit} exceeded at '{reference}'")]
    DepthExceeded {
        /// The reference at which the limit was hit.
        reference: String,
        /// The configured limit.
        limit: usize,
    },
}

/// Best-effort preprocessing result: the assembled document plus every
/// problem encountered along the way.
#[derive(Debug)]
pub struct PreprocessOutcome {
    /// The assembled, marker-delimited document.
    pub document: String,
    /// Problems encountered; empty on a clean run.
    pub errors: Vec<PreprocessError>,
}

impl PreprocessOutcome {
    /// Whether any include failed to expand.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Expands `!include` directives against a [`SourceLocator`].
pub struct Preprocessor<'a> {
    locator: &'a dyn SourceLocator,
    max_depth: usize,
}

impl<'a> Preprocessor<'a> {
    /// Create a preprocessor with the default depth limit.
    #[must_use]
    pub fn new(locator: &'a dyn SourceLocator) -> Self {
        Self {
            locator,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the depth limit for nested includes.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand all includes in the document.
    ///
    /// Failed includes are dropped from the output and reported in the
    /// outcome's error list; everything that did resolve is kept.
    #[must_use]
    pub fn preprocess(&self, source: &DiagramSource) -> PreprocessOutcome {
        let mut errors = Vec::new();
        let mut in_flight = HashSet::new();
        let mut out = Vec::with_capacity(source.lines().len());
        self.expand_into(source.lines(), 0, &mut in_flight, &mut out, &mut errors);

        for error in &errors {
            tracing::warn!(error = %error, "include preprocessing problem");
        }

        let mut document = out.join("\n");
        document.push('\n');
        PreprocessOutcome { document, errors }
    }

    fn expand_into(
        &self,
        lines: &[String],
        depth: usize,
        in_flight: &mut HashSet<String>,
        out: &mut Vec<String>,
        errors: &mut Vec<PreprocessError>,
    ) {
        for line in lines {
            let Some(caps) = INCLUDE_PATTERN.captures(line) else {
                out.push(line.clone());
                continue;
            };
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let reference = caps.get(2).map_or("", |m| m.as_str()).trim();

            // Engine standard-library includes are the renderer's business.
            if reference.starts_with('<') && reference.ends_with('>') {
                out.push(line.clone());
                continue;
            }

            if depth >= self.max_depth {
                errors.push(PreprocessError::DepthExceeded {
                    reference: reference.to_owned(),
                    limit: self.max_depth,
                });
                continue;
            }
            if !in_flight.insert(reference.to_owned()) {
                errors.push(PreprocessError::CircularInclude {
                    reference: reference.to_owned(),
                });
                continue;
            }

            match self.locator.locate(reference) {
                Ok(fragment) => {
                    let mut expanded = Vec::with_capacity(fragment.body_lines().len());
                    self.expand_into(fragment.body_lines(), depth + 1, in_flight, &mut expanded, errors);
                    for fragment_line in expanded {
                        if fragment_line.is_empty() {
                            out.push(fragment_line);
                        } else {
                            out.push(format!("{indent}{fragment_line}"));
                        }
                    }
                }
                Err(source) => {
                    errors.push(PreprocessError::Unresolved {
                        reference: reference.to_owned(),
                        source,
                    });
                }
            }

            in_flight.remove(reference);
        }
    }
}
