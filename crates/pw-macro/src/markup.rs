//! Assembly of the embeddable HTML fragment.
//!
//! Pure formatting: an optional error block, the optional image map,
//! the optional attribution block and the image element itself are
//! concatenated by the macro entry point.

use pw_render::ImageMap;
use pw_source::PreprocessError;

use crate::params::Alignment;

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Inline error block for accumulated preprocessing problems.
///
/// One span per problem, so a partially broken document shows what
/// failed next to what did render.
#[must_use]
pub fn error_block(errors: &[PreprocessError]) -> String {
    let mut html = String::from("<div class=\"error\">");
    for error in errors {
        html.push_str("<span class=\"error\">diagram: ");
        html.push_str(&escape_html(&error.to_string()));
        html.push_str("</span><br/>");
    }
    html.push_str("</div>");
    html
}

/// The image element wrapped in its alignment container.
#[must_use]
pub fn image_block(map: &ImageMap, url: &str, image_style: &str, alignment: Alignment) -> String {
    let mut html = format!(
        "<div class=\"image-wrap\" style=\"{}\">",
        alignment.css()
    );
    html.push_str("<img");
    if map.is_valid()
        && let Some(id) = map.id()
    {
        html.push_str(&format!(" usemap=\"#{id}\""));
    }
    html.push_str(&format!(" src=\"{url}\""));
    html.push_str(image_style);
    html.push_str("/></div>");
    html
}
