//! The renderer trait and its inputs.

use std::io::Write;

use crate::image_map::ImageMap;

/// Output image format for a rendered diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Raster PNG. The default; every output device supports it.
    #[default]
    Png,
    /// Vector SVG. Only usable on devices that can display vector output.
    Svg,
}

impl ImageFormat {
    /// Parse a `format` parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PNG" => Some(Self::Png),
            "SVG" => Some(Self::Svg),
            _ => None,
        }
    }

    /// File extension including the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Svg => ".svg",
        }
    }

    /// MIME type of the rendered artifact.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Options handed to the rendering engine alongside the document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Output image format.
    pub format: ImageFormat,
    /// Engine configuration lines prepended to the document (skinparams,
    /// title directives).
    pub config: Vec<String>,
}

impl RenderOptions {
    /// Options for the given format with no extra configuration.
    #[must_use]
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            config: Vec::new(),
        }
    }

    /// Attach engine configuration lines.
    #[must_use]
    pub fn with_config(mut self, config: Vec<String>) -> Self {
        self.config = config;
        self
    }
}

/// Error from the rendering engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The engine rejected the document.
    #[error("rendering engine error: {0}")]
    Engine(String),

    /// The engine's rendering step was interrupted. Callers remap this
    /// to an I/O failure.
    #[error("rendering interrupted")]
    Interrupted,

    /// I/O error writing the artifact.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// The external diagram-rendering engine.
///
/// Takes a complete marker-delimited document, writes the rendered
/// bitmap into `out` and returns the image map for any links embedded
/// in the diagram.
pub trait DiagramRenderer: Send + Sync {
    /// Render a document into the given stream.
    fn render(
        &self,
        document: &str,
        options: &RenderOptions,
        out: &mut dyn Write,
    ) -> Result<ImageMap, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_case_insensitive() {
        assert_eq!(ImageFormat::parse("PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::parse("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::parse("svg"), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::parse("gif"), None);
        assert_eq!(ImageFormat::parse(""), None);
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ImageFormat::Png.extension(), ".png");
        assert_eq!(ImageFormat::Svg.extension(), ".svg");
        assert_eq!(ImageFormat::Png.media_type(), "image/png");
        assert_eq!(ImageFormat::Svg.media_type(), "image/svg+xml");
    }

    #[test]
    fn test_default_format_is_raster() {
        assert_eq!(ImageFormat::default(), ImageFormat::Png);
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new(ImageFormat::Svg)
            .with_config(vec!["skinparam shadowing false".to_owned()]);
        assert_eq!(options.format, ImageFormat::Svg);
        assert_eq!(options.config.len(), 1);
    }
}
