//! The macro entry point.

use std::collections::HashMap;
use std::sync::Arc;

use pw_host::{DownloadStore, GlobalSettings, HostError, OutputDevice, PageSource, RenderContext};
use pw_render::{DiagramRenderer, RenderError, RenderOptions};
use pw_source::{Preprocessor, SourceBuilder};

use crate::config::PluginConfig;
use crate::engine_config::config_lines;
use crate::locator::WikiSourceLocator;
use crate::markup::{error_block, image_block};
use crate::params::MacroParams;
use crate::plugin_info::{PluginInfo, is_version_info};

/// Structural failure of a macro invocation.
///
/// Preprocessing problems are not errors at this level; they are
/// rendered inline (spec tier: recoverable). Anything here aborts the
/// invocation and is displayed by the host.
#[derive(Debug, thiserror::Error)]
pub enum MacroError {
    /// Invoked outside a page-rendering context.
    #[error("this macro can only be used on wiki pages")]
    NotAPage,

    /// Host collaborator failure (download slot allocation, lookup I/O).
    #[error("host error")]
    Host(#[from] HostError),

    /// The rendering engine failed.
    #[error("diagram rendering failed")]
    Render(#[source] RenderError),

    /// I/O failure writing the rendered artifact.
    #[error("I/O error writing rendered diagram")]
    Io(#[from] std::io::Error),
}

/// The diagram macro.
///
/// One instance serves the whole installation; each page view calls
/// [`execute`](Self::execute) with that invocation's parameters, body
/// and render context. All host interaction goes through the injected
/// collaborator traits.
pub struct DiagramMacro {
    pages: Arc<dyn PageSource>,
    settings: Arc<dyn GlobalSettings>,
    downloads: Arc<dyn DownloadStore>,
    renderer: Arc<dyn DiagramRenderer>,
    config: PluginConfig,
}

impl DiagramMacro {
    /// Wire up the macro with its host collaborators and the rendering
    /// engine.
    #[must_use]
    pub fn new(
        pages: Arc<dyn PageSource>,
        settings: Arc<dyn GlobalSettings>,
        downloads: Arc<dyn DownloadStore>,
        renderer: Arc<dyn DiagramRenderer>,
    ) -> Self {
        Self {
            pages,
            settings,
            downloads,
            renderer,
            config: PluginConfig::default(),
        }
    }

    /// Apply installation-level configuration.
    #[must_use]
    pub fn with_config(mut self, config: PluginConfig) -> Self {
        self.config = config;
        self
    }

    /// Render one macro invocation into an embeddable HTML fragment.
    ///
    /// The body arrives HTML-escaped from the host and is unescaped
    /// before processing. Include problems are rendered inline; only
    /// structural failures abort.
    pub fn execute(
        &self,
        params: &HashMap<String, String>,
        body: &str,
        ctx: &RenderContext,
    ) -> Result<String, MacroError> {
        let body = htmlize::unescape(body);
        let page = ctx.page.as_ref().ok_or(MacroError::NotAPage)?;
        let params = MacroParams::new(params);

        let diagram_type = params.diagram_type(self.config.default_diagram_type());
        let source = SourceBuilder::new(diagram_type).append(&body).build();

        let locator = WikiSourceLocator::new(self.pages.as_ref(), page.clone());
        let outcome = Preprocessor::new(&locator)
            .max_depth(self.config.max_include_depth)
            .preprocess(&source);

        if params.debug() {
            tracing::debug!(
                diagram_type = ?source.diagram_type(),
                document = %outcome.document,
                "assembled diagram document"
            );
        }

        let format = params.image_format(ctx);
        let mut slot = self
            .downloads
            .create(ctx.user.as_deref(), "diagram", format.extension())?;

        let options = RenderOptions::new(format).with_config(config_lines(&params));
        let map = match self.renderer.render(&outcome.document, &options, slot.writer()) {
            Ok(map) => map,
            // An interrupted engine is indistinguishable from a torn
            // write from the caller's point of view.
            Err(RenderError::Interrupted) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Interrupted,
                    "rendering interrupted",
                )
                .into());
            }
            Err(error) => return Err(MacroError::Render(error)),
        };

        let url = self.artifact_url(ctx.output, slot.url());

        let mut html = String::new();
        if outcome.has_errors() {
            html.push_str(&error_block(&outcome.errors));
        }
        if map.is_valid() {
            html.push_str(map.as_html());
        }
        if self.config.attribution && is_version_info(&outcome.document) {
            html.push_str(&PluginInfo::default().to_html());
        }
        html.push_str(&image_block(
            &map,
            &url,
            &params.image_style(),
            params.alignment(),
        ));
        Ok(html)
    }

    /// Image URL for the emitted markup.
    ///
    /// Browser contexts resolve relative paths against the page; feeds,
    /// mails and exports are consumed elsewhere and need the absolute
    /// URL.
    fn artifact_url(&self, output: OutputDevice, path: &str) -> String {
        if matches!(output, OutputDevice::Display | OutputDevice::Preview) {
            path.to_owned()
        } else {
            format!("{}{path}", self.settings.base_url().trim_end_matches('/'))
        }
    }
}
