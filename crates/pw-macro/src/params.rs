//! Macro parameter interpretation.
//!
//! The host hands the macro an untyped string map. [`MacroParams`] turns
//! it into typed, defaulted values: absent or unparsable numbers become
//! zero, unknown enumeration values fall back to their defaults, and
//! format selection honors the output device's capabilities. Nothing in
//! here fails a request.

use std::collections::HashMap;

use pw_host::RenderContext;
use pw_render::ImageFormat;
use pw_source::DiagramType;

/// Recognized parameter keys (case-sensitive on the wire).
#[derive(Debug, Clone, Copy)]
enum Param {
    Title,
    Type,
    Width,
    Border,
    Align,
    Hspace,
    Vspace,
    Format,
    Dropshadow,
    Separation,
    ExportName,
    Debug,
}

impl Param {
    fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Type => "type",
            Self::Width => "width",
            Self::Border => "border",
            Self::Align => "align",
            Self::Hspace => "hspace",
            Self::Vspace => "vspace",
            Self::Format => "format",
            Self::Dropshadow => "dropshadow",
            Self::Separation => "separation",
            Self::ExportName => "exportName",
            Self::Debug => "debug",
        }
    }
}

/// Image alignment inside the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment rule.
    #[default]
    None,
    /// Float left.
    Left,
    /// Centered block.
    Center,
    /// Float right.
    Right,
}

impl Alignment {
    /// Parse an `align` value; unrecognized values fall back to
    /// [`Alignment::None`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::None,
        }
    }

    /// The CSS rule for this alignment.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Left => "float: left;",
            Self::Center => "display: block; text-align: center;",
            Self::Right => "float: right;",
        }
    }
}

/// Typed view over a macro's parameter map.
#[derive(Debug)]
pub struct MacroParams<'a> {
    params: &'a HashMap<String, String>,
}

impl<'a> MacroParams<'a> {
    /// Wrap a parameter map.
    #[must_use]
    pub fn new(params: &'a HashMap<String, String>) -> Self {
        Self { params }
    }

    fn get(&self, param: Param) -> Option<&'a str> {
        self.params.get(param.key()).map(String::as_str)
    }

    fn number(&self, param: Param) -> u32 {
        self.get(param)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn flag(&self, param: Param, default: bool) -> bool {
        self.get(param)
            .map_or(default, |s| s.eq_ignore_ascii_case("true"))
    }

    /// Diagram title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.get(Param::Title)
    }

    /// CSS width value, if set.
    #[must_use]
    pub fn width(&self) -> Option<&'a str> {
        self.get(Param::Width)
    }

    /// Border width in pixels; zero when absent or unparsable.
    #[must_use]
    pub fn border(&self) -> u32 {
        self.number(Param::Border)
    }

    /// Horizontal margin in pixels; zero when absent or unparsable.
    #[must_use]
    pub fn hspace(&self) -> u32 {
        self.number(Param::Hspace)
    }

    /// Vertical margin in pixels; zero when absent or unparsable.
    #[must_use]
    pub fn vspace(&self) -> u32 {
        self.number(Param::Vspace)
    }

    /// Image alignment; [`Alignment::None`] when absent or unrecognized.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.get(Param::Align).map_or_else(Alignment::default, Alignment::parse)
    }

    /// Diagram type; `default` when absent or unrecognized
    /// (case-insensitive match).
    #[must_use]
    pub fn diagram_type(&self, default: DiagramType) -> DiagramType {
        self.get(Param::Type)
            .and_then(DiagramType::parse)
            .unwrap_or(default)
    }

    /// Effective output format for the given render context.
    ///
    /// The requested format is honored only on devices that support
    /// vector output; everywhere else the raster default wins,
    /// regardless of what was asked for.
    #[must_use]
    pub fn image_format(&self, ctx: &RenderContext) -> ImageFormat {
        if !ctx.output.supports_vector() {
            return ImageFormat::Png;
        }
        self.get(Param::Format)
            .and_then(ImageFormat::parse)
            .unwrap_or_default()
    }

    /// Whether the engine should draw drop shadows. Defaults to true.
    #[must_use]
    pub fn drop_shadow(&self) -> bool {
        self.flag(Param::Dropshadow, true)
    }

    /// Whether the engine should separate page elements. Defaults to true.
    #[must_use]
    pub fn separation(&self) -> bool {
        self.flag(Param::Separation, true)
    }

    /// Attachment name to export the assembled source under, if set.
    #[must_use]
    pub fn export_name(&self) -> Option<&'a str> {
        self.get(Param::ExportName)
    }

    /// Whether to log the assembled document. Defaults to false.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.flag(Param::Debug, false)
    }

    /// Inline style attribute for the image element.
    ///
    /// Assembles border, margin and width rules from the numeric
    /// parameters; empty rules are omitted.
    #[must_use]
    pub fn image_style(&self) -> String {
        let mut style = String::from(" style=\"");
        if self.border() > 0 {
            style.push_str(&format!("border:{}px solid black;", self.border()));
        }
        if self.hspace() > 0 || self.vspace() > 0 {
            style.push_str(&format!("margin:{}px {}px;", self.vspace(), self.hspace()));
        }
        if let Some(width) = self.width() {
            if !width.is_empty() {
                style.push_str(&format!("width:{width}"));
            }
        }
        style.push_str("\" ");
        style
    }
}
