use serde::{Deserialize, Serialize};

/// A single path/text entry of a mind map app.
///
/// Both fields are optional and carry no format constraint: `path` is free
/// text that may or may not start with `/`. Leaves are never edited once
/// stored; apps only grow by appending new ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl Leaf {
    /// Create a leaf with both fields present.
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            text: Some(text.into()),
        }
    }

    /// Returns `true` if neither a path nor a text is set.
    pub fn is_blank(&self) -> bool {
        self.path.is_none() && self.text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaf_from_json() {
        let leaf: Leaf = serde_json::from_value(json!({
            "path": "/fake/this/is/a/path/0",
            "text": "This is a fake topic 0",
        }))
        .unwrap();
        assert_eq!(leaf.path.as_deref(), Some("/fake/this/is/a/path/0"));
        assert_eq!(leaf.text.as_deref(), Some("This is a fake topic 0"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let leaf: Leaf = serde_json::from_value(json!({})).unwrap();
        assert!(leaf.is_blank());

        let leaf: Leaf = serde_json::from_value(json!({ "text": "only text" })).unwrap();
        assert!(leaf.path.is_none());
        assert!(!leaf.is_blank());
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let value = serde_json::to_value(Leaf::default()).unwrap();
        assert_eq!(value, json!({ "path": null, "text": null }));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let res: Result<Leaf, _> = serde_json::from_value(json!({ "path": 42 }));
        assert!(res.is_err());
    }
}
