//! Color formatting.

use figweb_document::Color;

/// Render a normalized color as `rgb(R, G, B)`.
///
/// Channels are truncated, not rounded: `floor(component * 255)`.
/// Components are expected in `0.0..=1.0`; values outside saturate.
pub fn css_rgb(color: &Color) -> String {
    format!(
        "rgb({}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(component: f64) -> u8 {
    (component * 255.0).floor() as u8
}
