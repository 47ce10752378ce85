//! Typed design-document node tree.
//!
//! Mirrors the JSON export of a design tool: every node carries a `type`
//! tag and, for renderable kinds, absolute geometry. Attribute names follow
//! the export (`camelCase`); anything the converter does not use is ignored
//! during deserialization.

use serde::Deserialize;

/// A node in the design tree.
///
/// `INSTANCE` and `GROUP` carry the same attribute set as `FRAME` and are
/// rendered as frames. Any tag outside the known set deserializes to
/// [`Node::Unknown`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Node {
    Frame(FrameNode),
    Instance(FrameNode),
    Group(FrameNode),
    Rectangle(ShapeNode),
    Ellipse(ShapeNode),
    Line(ShapeNode),
    Text(TextNode),
    /// Vector paths. Attributes are accepted and discarded.
    Vector,
    #[serde(other)]
    Unknown,
}

impl Node {
    /// The export's type tag for this node (`"UNKNOWN"` for unrecognized tags).
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Frame(_) => "FRAME",
            Node::Instance(_) => "INSTANCE",
            Node::Group(_) => "GROUP",
            Node::Rectangle(_) => "RECTANGLE",
            Node::Ellipse(_) => "ELLIPSE",
            Node::Line(_) => "LINE",
            Node::Text(_) => "TEXT",
            Node::Vector => "VECTOR",
            Node::Unknown => "UNKNOWN",
        }
    }

    /// Child nodes in document order. Empty for leaf kinds.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Frame(frame) | Node::Instance(frame) | Node::Group(frame) => &frame.children,
            _ => &[],
        }
    }
}

/// Absolute position and size in design units (1 unit = 1px).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Container node: frames, component instances and groups.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameNode {
    #[serde(flatten)]
    pub bounds: Bounds,
    pub layout_mode: Option<LayoutMode>,
    pub primary_axis_align_items: Option<String>,
    pub counter_axis_align_items: Option<String>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub item_spacing: Option<f64>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    pub opacity: Option<f64>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Rectangles, ellipses and lines.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNode {
    #[serde(flatten)]
    pub bounds: Bounds,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub corner_radius: Option<f64>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(flatten)]
    pub bounds: Bounds,
    #[serde(default)]
    pub characters: String,
    pub font_name: Option<FontName>,
    pub font_size: Option<f64>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    pub letter_spacing: Option<Measure>,
    pub line_height: Option<Measure>,
    pub text_case: Option<String>,
    pub text_decoration: Option<String>,
}

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
    #[serde(other)]
    None,
}

/// A fill or stroke paint. Gradients and other paint kinds collapse to
/// [`Paint::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Color,
    },
    Image {
        #[serde(rename = "imageHash")]
        image_hash: Option<String>,
    },
    #[serde(other)]
    Other,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Paint::Solid {
            color: Color { r, g, b },
        }
    }
}

/// Normalized RGB color, components in `0.0..=1.0`. Alpha is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: Option<String>,
}

/// Letter spacing or line height, tagged by unit. `AUTO` and anything else
/// collapse to [`Measure::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "unit", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Measure {
    Pixels { value: f64 },
    Percent { value: f64 },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // Tag dispatch
    // =========================================================================

    #[test]
    fn test_frame_with_children() {
        let n = node(
            r#"{"type":"FRAME","x":0,"y":0,"width":100,"height":50,
                "children":[{"type":"TEXT","x":10,"y":10,"width":80,"height":20,"characters":"Hi"}]}"#,
        );
        assert_eq!(n.kind(), "FRAME");
        assert_eq!(n.children().len(), 1);
        assert_eq!(n.children()[0].kind(), "TEXT");
    }

    #[test]
    fn test_instance_and_group_share_frame_attributes() {
        let inst = node(r#"{"type":"INSTANCE","x":1,"y":2,"width":3,"height":4,"itemSpacing":8}"#);
        let group = node(r#"{"type":"GROUP","x":1,"y":2,"width":3,"height":4,"itemSpacing":8}"#);
        match (inst, group) {
            (Node::Instance(a), Node::Group(b)) => {
                assert_eq!(a, b);
                assert_eq!(a.item_spacing, Some(8.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_vector_discards_attributes() {
        let n = node(r#"{"type":"VECTOR","x":0,"y":0,"width":5,"height":5,"fills":[]}"#);
        assert_eq!(n, Node::Vector);
        assert!(n.children().is_empty());
    }

    #[test]
    fn test_unknown_type() {
        let n = node(r#"{"type":"BOOLEAN_OPERATION","x":0,"y":0,"width":5,"height":5}"#);
        assert_eq!(n, Node::Unknown);
        assert_eq!(n.kind(), "UNKNOWN");
    }

    #[test]
    fn test_missing_geometry_is_error() {
        let result = serde_json::from_str::<Node>(r#"{"type":"RECTANGLE","x":0,"y":0,"width":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let n = node(
            r#"{"id":"1:5","name":"Box","visible":true,"type":"RECTANGLE",
                "x":0,"y":0,"width":5,"height":6,"cornerRadius":4}"#,
        );
        match n {
            Node::Rectangle(shape) => {
                assert_eq!(shape.bounds.height, 6.0);
                assert_eq!(shape.corner_radius, Some(4.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    // =========================================================================
    // Attribute records
    // =========================================================================

    #[test]
    fn test_paints() {
        let fills: Vec<Paint> = serde_json::from_str(
            r#"[{"type":"SOLID","color":{"r":1,"g":0.5,"b":0,"a":1},"opacity":1},
                {"type":"IMAGE","imageHash":"abc123","scaleMode":"FILL"},
                {"type":"GRADIENT_LINEAR","gradientStops":[]}]"#,
        )
        .unwrap();
        assert_eq!(fills[0], Paint::solid(1.0, 0.5, 0.0));
        assert_eq!(
            fills[1],
            Paint::Image {
                image_hash: Some("abc123".into())
            }
        );
        assert_eq!(fills[2], Paint::Other);
    }

    #[test]
    fn test_layout_mode() {
        let modes: Vec<LayoutMode> =
            serde_json::from_str(r#"["VERTICAL","HORIZONTAL","NONE","GRID"]"#).unwrap();
        assert_eq!(
            modes,
            vec![
                LayoutMode::Vertical,
                LayoutMode::Horizontal,
                LayoutMode::None,
                LayoutMode::None
            ]
        );
    }

    #[test]
    fn test_measures() {
        let m: Vec<Measure> = serde_json::from_str(
            r#"[{"unit":"PIXELS","value":14},{"unit":"PERCENT","value":120},{"unit":"AUTO"}]"#,
        )
        .unwrap();
        assert_eq!(
            m,
            vec![
                Measure::Pixels { value: 14.0 },
                Measure::Percent { value: 120.0 },
                Measure::Other
            ]
        );
    }

    #[test]
    fn test_text_attributes() {
        let n = node(
            r#"{"type":"TEXT","x":0,"y":0,"width":10,"height":10,"characters":"Go",
                "fontName":{"family":"Inter","style":"Semi Bold"},"fontSize":16,
                "textAlignHorizontal":"CENTER","textAlignVertical":"TOP",
                "textCase":"UPPER","textDecoration":"UNDERLINE"}"#,
        );
        match n {
            Node::Text(text) => {
                assert_eq!(text.characters, "Go");
                assert_eq!(text.font_name.unwrap().style.as_deref(), Some("Semi Bold"));
                assert_eq!(text.font_size, Some(16.0));
                assert_eq!(text.text_case.as_deref(), Some("UPPER"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
