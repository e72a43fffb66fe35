//! Mock renderer for testing.

use std::io::Write;
use std::sync::Mutex;

use crate::image_map::ImageMap;
use crate::renderer::{DiagramRenderer, RenderError, RenderOptions};

/// Failure modes the mock can be told to produce.
#[derive(Debug, Clone)]
enum Failure {
    Engine(String),
    Interrupted,
}

/// In-memory renderer for testing.
///
/// Writes configurable bytes instead of a real bitmap, returns a
/// configurable image map and records every document it was asked to
/// render.
#[derive(Debug, Default)]
pub struct MockRenderer {
    image: Vec<u8>,
    map_html: String,
    failure: Option<Failure>,
    seen: Mutex<Vec<(String, RenderOptions)>>,
}

impl MockRenderer {
    /// A renderer that emits `PNG` placeholder bytes and no image map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            image: b"\x89PNG-mock".to_vec(),
            ..Self::default()
        }
    }

    /// Set the bytes written per render.
    #[must_use]
    pub fn with_image(mut self, image: &[u8]) -> Self {
        self.image = image.to_vec();
        self
    }

    /// Set the image-map HTML returned per render.
    #[must_use]
    pub fn with_map(mut self, map_html: &str) -> Self {
        self.map_html = map_html.to_owned();
        self
    }

    /// Fail every render with an engine error.
    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(Failure::Engine(message.to_owned()));
        self
    }

    /// Fail every render with an interruption.
    #[must_use]
    pub fn interrupted(mut self) -> Self {
        self.failure = Some(Failure::Interrupted);
        self
    }

    /// Documents rendered so far, in order.
    #[must_use]
    pub fn documents(&self) -> Vec<String> {
        let seen = self.seen.lock().unwrap();
        seen.iter().map(|(doc, _)| doc.clone()).collect()
    }

    /// Options of the most recent render.
    #[must_use]
    pub fn last_options(&self) -> Option<RenderOptions> {
        let seen = self.seen.lock().unwrap();
        seen.last().map(|(_, options)| options.clone())
    }
}

impl DiagramRenderer for MockRenderer {
    fn render(
        &self,
        document: &str,
        options: &RenderOptions,
        out: &mut dyn Write,
    ) -> Result<ImageMap, RenderError> {
        self.seen
            .lock()
            .unwrap()
            .push((document.to_owned(), options.clone()));
        match &self.failure {
            Some(Failure::Engine(message)) => return Err(RenderError::Engine(message.clone())),
            Some(Failure::Interrupted) => return Err(RenderError::Interrupted),
            None => {}
        }
        out.write_all(&self.image)?;
        Ok(ImageMap::new(self.map_html.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::renderer::ImageFormat;

    #[test]
    fn test_records_documents_and_writes_bytes() {
        let renderer = MockRenderer::new().with_image(b"img");
        let mut out = Vec::new();
        let map = renderer
            .render("@startuml\n@enduml\n", &RenderOptions::new(ImageFormat::Png), &mut out)
            .unwrap();
        assert_eq!(out, b"img");
        assert!(!map.is_valid());
        assert_eq!(renderer.documents(), ["@startuml\n@enduml\n"]);
    }

    #[test]
    fn test_failure_modes() {
        let renderer = MockRenderer::new().failing("syntax error");
        let mut out = Vec::new();
        let err = renderer
            .render("doc", &RenderOptions::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, RenderError::Engine(_)));

        let renderer = MockRenderer::new().interrupted();
        let err = renderer
            .render("doc", &RenderOptions::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, RenderError::Interrupted));
    }
}
