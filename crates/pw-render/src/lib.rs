//! Rendering-engine seam for the plantwiki macro.
//!
//! The macro contributes no layout or rasterization logic; rendering is
//! delegated through the [`DiagramRenderer`] trait. This crate holds the
//! trait, the [`ImageFormat`]/[`RenderOptions`] inputs and the
//! [`ImageMap`] output, plus a [`MockRenderer`] behind the `mock`
//! feature for testing.

mod image_map;
mod renderer;

#[cfg(feature = "mock")]
mod mock;

pub use image_map::ImageMap;
pub use renderer::{DiagramRenderer, ImageFormat, RenderError, RenderOptions};

#[cfg(feature = "mock")]
pub use mock::MockRenderer;
