//! figweb code generator
//!
//! Compiles a design tree into two outputs: HTML markup and CSS. The HTML
//! generator walks the tree, assigning each rendered node a generated class
//! (`class-N`) and registering its style; the CSS generator then serializes
//! the registry.
//!
//! ```text
//! Document → compile() → CompilerOutput { html, css, classes, images }
//! ```

pub mod color;
pub mod css;
pub mod html;
pub mod page;
pub mod styles;

pub use page::{PageOptions, DEFAULT_TITLE};
pub use styles::StyleMap;

use figweb_document::Document;
use indexmap::IndexMap;

/// Generated class name → properties, in registration order.
pub type StyleRegistry = IndexMap<String, StyleMap>;

/// The compiled output from a design document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOutput {
    pub html: String,
    pub css: String,
    /// Number of generated classes (one per rendered node).
    pub classes: usize,
    /// Image paths referenced by fills, first reference first. Not resolved.
    pub images: Vec<String>,
}

/// Per-conversion state shared between the HTML and CSS generators.
/// HTML generation allocates classes and fills the registry; CSS generation
/// reads it.
#[derive(Debug, Default)]
pub struct CompilationContext {
    pub next_class: usize,
    pub styles: StyleRegistry,
    pub images: Vec<String>,
}

impl CompilationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign_class(&mut self) -> String {
        let class = format!("class-{}", self.next_class);
        self.next_class += 1;
        class
    }

    /// Allocate the next class and register `style` under it.
    pub fn register(&mut self, style: StyleMap) -> String {
        let class = self.assign_class();
        self.styles.insert(class.clone(), style);
        class
    }

    pub fn note_image(&mut self, path: Option<String>) {
        if let Some(path) = path {
            if !self.images.contains(&path) {
                self.images.push(path);
            }
        }
    }
}

/// Compile a design document into HTML + CSS.
pub fn compile(doc: &Document) -> CompilerOutput {
    let mut ctx = CompilationContext::new();

    let html_output = html::generate(&doc.root, &mut ctx);
    let css_output = css::generate(&ctx.styles);
    log::debug!(
        "compiled {} classes, {} image references",
        ctx.styles.len(),
        ctx.images.len()
    );

    CompilerOutput {
        html: html_output,
        css: css_output,
        classes: ctx.styles.len(),
        images: ctx.images,
    }
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    // Beyond 1e15 the i64 cast would saturate; f64's Display is already integral there.
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
