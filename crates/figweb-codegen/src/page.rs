//! Standalone page assembly.
//!
//! Wraps the generated markup and stylesheet into a complete HTML document.

use crate::CompilerOutput;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Figma Design";

/// Options for the generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Render a complete HTML document with an inline stylesheet.
pub fn render(output: &CompilerOutput, options: &PageOptions) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("    <meta charset=\"UTF-8\">\n");
    page.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    page.push_str(&format!("    <title>{}</title>\n", escape_text(&options.title)));
    page.push_str(&format!("    <style>\n{}\n    </style>\n", output.css));
    page.push_str("</head>\n<body>\n");
    page.push_str(&output.html);
    page.push_str("\n</body>\n</html>");
    page
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(html: &str, css: &str) -> CompilerOutput {
        CompilerOutput {
            html: html.into(),
            css: css.into(),
            classes: 0,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_default_page() {
        let page = render(
            &output("<div class=\"class-0\"></div>", ".class-0 {\n}\n\n"),
            &PageOptions::default(),
        );
        assert_eq!(
            page,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    <title>Figma Design</title>\n    <style>\n.class-0 {\n}\n\n\n    </style>\n</head>\n<body>\n<div class=\"class-0\"></div>\n</body>\n</html>"
        );
    }

    #[test]
    fn test_custom_title_escaped() {
        let page = render(
            &output("", ""),
            &PageOptions {
                title: "Home & <Away>".into(),
            },
        );
        assert!(page.contains("<title>Home &amp; &lt;Away&gt;</title>"));
    }
}
