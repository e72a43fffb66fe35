//! Building marker-delimited diagram documents.

use std::io::BufRead;

use crate::diagram_type::DiagramType;

/// A complete diagram-description document.
///
/// Immutable after construction; the line sequence is delimited by the
/// start/end markers of its diagram type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource {
    diagram_type: DiagramType,
    lines: Vec<String>,
}

impl DiagramSource {
    /// Diagram type of this document.
    #[must_use]
    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    /// All lines of the document, markers included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines between the delimiting markers.
    ///
    /// Used when splicing this document into another as an included
    /// fragment: the outer document keeps the single marker pair.
    #[must_use]
    pub fn body_lines(&self) -> &[String] {
        let start = self
            .lines
            .iter()
            .position(|l| l.trim_start().starts_with("@start"));
        let end = self
            .lines
            .iter()
            .rposition(|l| l.trim_start().starts_with("@end"));
        match (start, end) {
            (Some(s), Some(e)) if s < e => &self.lines[s + 1..e],
            _ => &self.lines,
        }
    }

    /// The document as a single string with a trailing newline.
    #[must_use]
    pub fn as_document(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Accumulates body text and normalizes it into a [`DiagramSource`].
///
/// The builder guarantees the marker invariant: a body that already
/// carries its start/end markers is left alone, a body with only the
/// start marker gets the matching end marker appended, and a bare body
/// is wrapped with its type's pair. Either way the built document is
/// delimited exactly once.
///
/// # Example
///
/// ```
/// use pw_source::{DiagramType, SourceBuilder};
///
/// let source = SourceBuilder::new(DiagramType::Dot)
///     .append("digraph g { a -> b; }")
///     .build();
/// assert_eq!(source.as_document(), "@startdot\ndigraph g { a -> b; }\n@enddot\n");
/// ```
#[derive(Debug)]
pub struct SourceBuilder {
    diagram_type: DiagramType,
    lines: Vec<String>,
}

impl SourceBuilder {
    /// Create a builder for the given diagram type.
    #[must_use]
    pub fn new(diagram_type: DiagramType) -> Self {
        Self {
            diagram_type,
            lines: Vec::new(),
        }
    }

    /// Append body text, split into lines.
    ///
    /// Blank lines are preserved, including leading ones. CR-LF line
    /// endings are normalized.
    #[must_use]
    pub fn append(mut self, text: &str) -> Self {
        if text.is_empty() {
            return self;
        }
        let mut lines: Vec<&str> = text.split('\n').collect();
        if text.ends_with('\n') {
            lines.pop();
        }
        for line in lines {
            self.lines
                .push(line.strip_suffix('\r').unwrap_or(line).to_owned());
        }
        self
    }

    /// Append body text read from a stream (e.g. attachment content).
    pub fn append_reader(mut self, reader: impl BufRead) -> std::io::Result<Self> {
        for line in reader.lines() {
            self.lines.push(line?);
        }
        Ok(self)
    }

    /// The body's own start marker, when its first non-blank line is one.
    ///
    /// The check is generic over `@start` so a fragment written with
    /// explicit markers of any type is never wrapped a second time.
    fn leading_marker(&self) -> Option<&str> {
        self.lines
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
            .filter(|l| l.starts_with("@start"))
    }

    fn has_end_marker(&self) -> bool {
        self.lines.iter().any(|l| l.trim_start().starts_with("@end"))
    }

    /// Build the normalized document.
    ///
    /// A body opening with its own start marker is kept as written; if
    /// its end marker is missing, the one matching the start marker is
    /// appended rather than wrapping the body a second time.
    #[must_use]
    pub fn build(self) -> DiagramSource {
        if let Some(marker) = self.leading_marker() {
            let missing_end = (!self.has_end_marker()).then(|| {
                let word = marker.split_whitespace().next().unwrap_or(marker);
                word.replacen("@start", "@end", 1)
            });
            let mut lines = self.lines;
            if let Some(end) = missing_end {
                lines.push(end);
            }
            return DiagramSource {
                diagram_type: self.diagram_type,
                lines,
            };
        }
        let mut lines = Vec::with_capacity(self.lines.len() + 2);
        lines.push(self.diagram_type.start_marker().to_owned());
        lines.extend(self.lines);
        lines.push(self.diagram_type.end_marker().to_owned());
        DiagramSource {
            diagram_type: self.diagram_type,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bare_body_is_wrapped() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("Alice -> Bob")
            .build();
        assert_eq!(source.diagram_type(), DiagramType::Uml);
        assert_eq!(source.as_document(), "@startuml\nAlice -> Bob\n@enduml\n");
    }

    #[test]
    fn test_dot_body_with_leading_blank_line() {
        let source = SourceBuilder::new(DiagramType::Dot)
            .append("\ndigraph deschedule_app_confusion {")
            .build();
        assert_eq!(
            source.as_document(),
            "@startdot\n\ndigraph deschedule_app_confusion {\n@enddot\n"
        );
    }

    #[test]
    fn test_delimited_body_not_rewrapped() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("@startuml\nAlice -> Bob\n@enduml")
            .build();
        assert_eq!(source.as_document(), "@startuml\nAlice -> Bob\n@enduml\n");
    }

    #[test]
    fn test_delimited_with_leading_blank_not_rewrapped() {
        let source = SourceBuilder::new(DiagramType::Ditaa)
            .append("\n@startditaa\n+---+\n@endditaa\n")
            .build();
        assert_eq!(
            source.as_document(),
            "\n@startditaa\n+---+\n@endditaa\n"
        );
    }

    #[test]
    fn test_missing_end_marker_appended() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("@startuml\nAlice -> Bob")
            .build();
        assert_eq!(source.as_document(), "@startuml\nAlice -> Bob\n@enduml\n");
    }

    #[test]
    fn test_missing_end_marker_matches_foreign_start() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("@startdot\ndigraph g {}")
            .build();
        assert_eq!(source.as_document(), "@startdot\ndigraph g {}\n@enddot\n");
    }

    #[test]
    fn test_crlf_normalized() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("Alice -> Bob\r\nBob -> Carol\r\n")
            .build();
        assert_eq!(
            source.as_document(),
            "@startuml\nAlice -> Bob\nBob -> Carol\n@enduml\n"
        );
    }

    #[test]
    fn test_append_reader() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append_reader("Alice -> Bob\nBob -> Carol".as_bytes())
            .unwrap()
            .build();
        assert_eq!(
            source.as_document(),
            "@startuml\nAlice -> Bob\nBob -> Carol\n@enduml\n"
        );
    }

    #[test]
    fn test_body_lines_strips_markers() {
        let source = SourceBuilder::new(DiagramType::Uml)
            .append("Alice -> Bob")
            .build();
        assert_eq!(source.body_lines(), ["Alice -> Bob"]);
    }

    #[test]
    fn test_body_lines_without_markers_returns_all() {
        let source = DiagramSource {
            diagram_type: DiagramType::Uml,
            lines: vec!["a".to_owned(), "b".to_owned()],
        };
        assert_eq!(source.body_lines(), ["a", "b"]);
    }

    #[test]
    fn test_empty_body_still_delimited() {
        let source = SourceBuilder::new(DiagramType::Uml).build();
        assert_eq!(source.as_document(), "@startuml\n@enduml\n");
    }
}
