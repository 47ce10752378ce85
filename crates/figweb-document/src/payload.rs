//! Locates the embedded design payload inside a larger text blob.
//!
//! Exports are often pasted into prompts or logs, so the JSON tree starts
//! somewhere in the middle of the text at a known root node id.

use crate::DocumentError;

/// Root node id used by single-page exports.
pub const DEFAULT_ROOT_ID: &str = "1:2";

/// Marker that opens the root node object for `root_id`.
pub fn marker(root_id: &str) -> String {
    format!("{{\"id\":\"{root_id}\"")
}

/// Return the text from the first root-node marker to the end of `text`.
pub fn locate<'a>(text: &'a str, root_id: &str) -> Result<&'a str, DocumentError> {
    let start = text
        .find(&marker(root_id))
        .ok_or_else(|| DocumentError::PayloadNotFound {
            root_id: root_id.to_string(),
        })?;
    Ok(&text[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marker() {
        assert_eq!(marker("1:2"), "{\"id\":\"1:2\"");
    }

    #[test]
    fn test_locate_inside_prompt() {
        let text = "Convert this design:\n{\"id\":\"1:2\",\"type\":\"FRAME\"}";
        assert_eq!(
            locate(text, DEFAULT_ROOT_ID).unwrap(),
            "{\"id\":\"1:2\",\"type\":\"FRAME\"}"
        );
    }

    #[test]
    fn test_locate_first_occurrence() {
        let text = "{\"id\":\"1:2\",\"a\":1} {\"id\":\"1:2\",\"b\":2}";
        assert_eq!(locate(text, "1:2").unwrap(), text);
    }

    #[test]
    fn test_locate_custom_root() {
        let text = "x {\"id\":\"1:2\"} {\"id\":\"40:7\",\"type\":\"GROUP\"}";
        assert_eq!(
            locate(text, "40:7").unwrap(),
            "{\"id\":\"40:7\",\"type\":\"GROUP\"}"
        );
    }

    #[test]
    fn test_locate_missing() {
        let err = locate("no design here", "1:2").unwrap_err();
        assert_eq!(
            err,
            DocumentError::PayloadNotFound {
                root_id: "1:2".into()
            }
        );
        assert_eq!(err.to_string(), "No design payload with root id \"1:2\" found");
    }
}
