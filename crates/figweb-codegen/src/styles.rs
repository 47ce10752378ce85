//! Style extractors.
//!
//! Each extractor maps one group of design attributes to a partial CSS
//! property map. Extractors are stateless; the visitor merges their output
//! into a node's style in a fixed order.

use crate::color::css_rgb;
use crate::format_number;
use figweb_document::{Bounds, Measure, Paint, TextNode};
use indexmap::IndexMap;

/// CSS properties in discovery order.
pub type StyleMap = IndexMap<String, String>;

/// Render a length in pixels.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Absolute positioning shared by every rendered node.
pub fn base_style(bounds: &Bounds) -> StyleMap {
    let mut style = StyleMap::new();
    style.insert("position".into(), "absolute".into());
    style.insert("left".into(), px(bounds.x));
    style.insert("top".into(), px(bounds.y));
    style.insert("width".into(), px(bounds.width));
    style.insert("height".into(), px(bounds.height));
    style
}

/// Relative path of the image referenced by the first fill, if any.
pub fn image_path(fills: &[Paint]) -> Option<String> {
    match fills.first() {
        Some(Paint::Image {
            image_hash: Some(hash),
        }) => Some(format!("images/{hash}.png")),
        _ => None,
    }
}

/// Background from the first fill. Later fills are ignored.
pub fn fill_styles(fills: &[Paint]) -> StyleMap {
    let mut style = StyleMap::new();
    match fills.first() {
        Some(Paint::Solid { color }) => {
            style.insert("background-color".into(), css_rgb(color));
        }
        Some(Paint::Image { .. }) => {
            if let Some(path) = image_path(fills) {
                style.insert("background-image".into(), format!("url({path})"));
                style.insert("background-size".into(), "cover".into());
            }
        }
        _ => {}
    }
    style
}

/// Border from the first stroke.
pub fn stroke_styles(strokes: &[Paint], weight: f64) -> StyleMap {
    let mut style = StyleMap::new();
    if let Some(Paint::Solid { color }) = strokes.first() {
        style.insert(
            "border".into(),
            format!("{} solid {}", px(weight), css_rgb(color)),
        );
    }
    style
}

/// Font and paragraph properties of a text node.
///
/// Vertical alignment is not reproduced, and letter spacing is only emitted
/// for percent units.
pub fn text_styles(text: &TextNode) -> StyleMap {
    let mut style = StyleMap::new();

    if let Some(font) = &text.font_name {
        style.insert("font-family".into(), font.family.clone());
        if let Some(font_style) = &font.style {
            let weight = if font_style.contains("Bold") {
                "bold"
            } else {
                "normal"
            };
            style.insert("font-weight".into(), weight.into());
        }
    }

    if let Some(size) = text.font_size {
        style.insert("font-size".into(), px(size));
    }

    if let Some(align) = &text.text_align_horizontal {
        style.insert("text-align".into(), align.to_lowercase());
    }

    if let Some(Paint::Solid { color }) = text.fills.first() {
        style.insert("color".into(), css_rgb(color));
    }

    match text.letter_spacing {
        Some(Measure::Percent { value }) => {
            style.insert(
                "letter-spacing".into(),
                format!("{}%", format_number(value)),
            );
        }
        Some(Measure::Pixels { value }) => {
            log::debug!("dropping pixel letter spacing ({value}px)");
        }
        _ => {}
    }

    match text.line_height {
        Some(Measure::Pixels { value }) => {
            style.insert("line-height".into(), px(value));
        }
        Some(Measure::Percent { value }) => {
            style.insert("line-height".into(), format!("{}%", format_number(value)));
        }
        _ => {}
    }

    style
}
