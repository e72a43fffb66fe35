//! Supported diagram languages and their document markers.

/// Diagram languages the macro accepts via the `type` parameter.
///
/// Each type has a pair of start/end markers that must delimit the
/// document handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramType {
    /// UML diagrams (`@startuml`). The default.
    #[default]
    Uml,
    /// GraphViz DOT graphs (`@startdot`).
    Dot,
    /// Ditaa ASCII-art diagrams (`@startditaa`).
    Ditaa,
    /// Math/formula blocks (`@startmath`).
    Math,
}

impl DiagramType {
    /// Parse a `type` parameter value, case-insensitively.
    ///
    /// Returns `None` for unknown values; callers fall back to the
    /// default type rather than failing the request.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "uml" => Some(Self::Uml),
            "dot" => Some(Self::Dot),
            "ditaa" => Some(Self::Ditaa),
            "math" => Some(Self::Math),
            _ => None,
        }
    }

    /// Start marker for this diagram type.
    #[must_use]
    pub fn start_marker(self) -> &'static str {
        match self {
            Self::Uml => "@startuml",
            Self::Dot => "@startdot",
            Self::Ditaa => "@startditaa",
            Self::Math => "@startmath",
        }
    }

    /// End marker for this diagram type.
    #[must_use]
    pub fn end_marker(self) -> &'static str {
        match self {
            Self::Uml => "@enduml",
            Self::Dot => "@enddot",
            Self::Ditaa => "@endditaa",
            Self::Math => "@endmath",
        }
    }
}
