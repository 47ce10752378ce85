//! HTML code generator.
//!
//! Walks the design tree depth-first. Every rendered node gets an absolute
//! position style, registered in the context under the next `class-N` name,
//! and a `<div>` referencing that class. Children are emitted inside their
//! parent in document order.

use crate::styles::{base_style, fill_styles, image_path, px, stroke_styles, text_styles, StyleMap};
use crate::{format_number, CompilationContext};
use figweb_document::{FrameNode, LayoutMode, Node, ShapeNode, TextNode};

/// Generate the markup for a tree, registering one style per rendered node.
pub fn generate(root: &Node, ctx: &mut CompilationContext) -> String {
    let mut html = String::new();
    generate_node(root, ctx, &mut html, 0);
    html
}

fn generate_node(node: &Node, ctx: &mut CompilationContext, out: &mut String, depth: usize) {
    log::debug!(
        "visiting {} at depth {depth} with {} children",
        node.kind(),
        node.children().len()
    );

    match node {
        Node::Frame(frame) | Node::Instance(frame) | Node::Group(frame) => {
            generate_frame(frame, ctx, out, depth)
        }
        Node::Rectangle(shape) => {
            ctx.note_image(image_path(&shape.fills));
            let class = ctx.register(rectangle_style(shape));
            push_div(out, &class, "");
        }
        Node::Ellipse(shape) => {
            ctx.note_image(image_path(&shape.fills));
            let class = ctx.register(ellipse_style(shape));
            push_div(out, &class, "");
        }
        Node::Line(shape) => {
            let class = ctx.register(line_style(shape));
            push_div(out, &class, "");
        }
        Node::Text(text) => {
            let class = ctx.register(text_style(text));
            // Inserted verbatim; markup-significant characters are not escaped.
            push_div(out, &class, &text.characters);
        }
        Node::Vector => {
            log::debug!("skipping {} node at depth {depth}", node.kind());
        }
        Node::Unknown => {
            log::warn!("skipping {} node at depth {depth}", node.kind());
        }
    }
}

fn generate_frame(frame: &FrameNode, ctx: &mut CompilationContext, out: &mut String, depth: usize) {
    ctx.note_image(image_path(&frame.fills));
    let class = ctx.register(frame_style(frame));

    out.push_str(&format!("<div class=\"{class}\">"));
    for child in &frame.children {
        generate_node(child, ctx, out, depth + 1);
    }
    out.push_str("</div>");
}

fn push_div(out: &mut String, class: &str, content: &str) {
    out.push_str(&format!("<div class=\"{class}\">{content}</div>"));
}

/// Style for frames, instances and groups.
pub fn frame_style(frame: &FrameNode) -> StyleMap {
    let mut style = base_style(&frame.bounds);

    let direction = match frame.layout_mode {
        Some(LayoutMode::Vertical) => Some("column"),
        Some(LayoutMode::Horizontal) => Some("row"),
        _ => None,
    };
    if let Some(direction) = direction {
        style.insert("display".into(), "flex".into());
        style.insert("flex-direction".into(), direction.into());
    }

    if let Some(align) = &frame.primary_axis_align_items {
        style.insert("justify-content".into(), css_keyword(align));
    }
    if let Some(align) = &frame.counter_axis_align_items {
        style.insert("align-items".into(), css_keyword(align));
    }

    let lengths = [
        ("padding-left", frame.padding_left),
        ("padding-right", frame.padding_right),
        ("padding-top", frame.padding_top),
        ("padding-bottom", frame.padding_bottom),
        ("gap", frame.item_spacing),
    ];
    for (property, value) in lengths {
        if let Some(value) = value {
            style.insert(property.into(), px(value));
        }
    }

    style.extend(fill_styles(&frame.fills));
    style.extend(stroke_styles(&frame.strokes, frame.stroke_weight.unwrap_or(0.0)));
    push_corner_and_opacity(&mut style, frame.corner_radius, frame.opacity);
    style
}

pub fn rectangle_style(shape: &ShapeNode) -> StyleMap {
    let mut style = base_style(&shape.bounds);
    style.extend(fill_styles(&shape.fills));
    style.extend(stroke_styles(&shape.strokes, shape.stroke_weight.unwrap_or(0.0)));
    push_corner_and_opacity(&mut style, shape.corner_radius, shape.opacity);
    style
}

/// Ellipses are always fully rounded; `cornerRadius` does not apply.
pub fn ellipse_style(shape: &ShapeNode) -> StyleMap {
    let mut style = base_style(&shape.bounds);
    style.insert("border-radius".into(), "50%".into());
    style.extend(fill_styles(&shape.fills));
    style.extend(stroke_styles(&shape.strokes, shape.stroke_weight.unwrap_or(0.0)));
    style
}

pub fn line_style(shape: &ShapeNode) -> StyleMap {
    let mut style = base_style(&shape.bounds);
    style.extend(stroke_styles(&shape.strokes, shape.stroke_weight.unwrap_or(0.0)));
    style
}

pub fn text_style(text: &TextNode) -> StyleMap {
    let mut style = base_style(&text.bounds);
    style.extend(text_styles(text));
    if text.text_case.as_deref() == Some("UPPER") {
        style.insert("text-transform".into(), "uppercase".into());
    }
    if let Some(decoration) = &text.text_decoration {
        style.insert("text-decoration".into(), decoration.to_lowercase());
    }
    style
}

fn push_corner_and_opacity(style: &mut StyleMap, corner_radius: Option<f64>, opacity: Option<f64>) {
    if let Some(radius) = corner_radius {
        style.insert("border-radius".into(), px(radius));
    }
    if let Some(opacity) = opacity {
        style.insert("opacity".into(), format_number(opacity));
    }
}

/// `SPACE_BETWEEN` → `space-between`.
fn css_keyword(keyword: &str) -> String {
    keyword.to_lowercase().replace('_', "-")
}
