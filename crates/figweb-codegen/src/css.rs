//! CSS code generator.
//!
//! Serializes the style registry into a stylesheet, one rule per class in
//! registration order.

use crate::StyleRegistry;

/// Generate CSS from the registered class styles.
pub fn generate(styles: &StyleRegistry) -> String {
    let mut css = String::new();
    for (class, properties) in styles {
        css.push_str(&format!(".{class} {{\n"));
        for (property, value) in properties {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push_str("}\n\n");
    }
    css
}
