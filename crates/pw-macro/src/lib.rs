//! The plantwiki diagram macro.
//!
//! Embeds textual diagram descriptions in wiki pages and turns them
//! into inline images with clickable image maps on every page view.
//! Rendering itself is delegated to an external engine behind
//! `pw-render`'s [`DiagramRenderer`](pw_render::DiagramRenderer) trait;
//! this crate owns everything around it:
//! - [`MacroParams`]: typed, defaulted parameter interpretation
//! - [`PluginConfig`]: installation-level defaults from TOML
//! - [`WikiSourceLocator`]: resolving `!include` cross-references to
//!   pages and attachments
//! - markup assembly ([`error_block`], [`image_block`])
//! - [`DiagramMacro`]: the entry point wiring it all together
//!
//! # Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use pw_macro::DiagramMacro;
//!
//! let diagram_macro = DiagramMacro::new(pages, settings, downloads, renderer);
//! let html = diagram_macro.execute(&HashMap::new(), "Alice -> Bob", &ctx)?;
//! ```

mod config;
mod engine_config;
mod invocation;
mod locator;
mod markup;
mod params;
mod plugin_info;

pub use config::{ConfigError, PluginConfig};
pub use engine_config::config_lines;
pub use invocation::{DiagramMacro, MacroError};
pub use locator::WikiSourceLocator;
pub use markup::{error_block, escape_html, image_block};
pub use params::{Alignment, MacroParams};
pub use plugin_info::{PluginInfo, is_version_info};
