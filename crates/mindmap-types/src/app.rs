use serde::{Deserialize, Serialize};

use crate::leaf::Leaf;

/// A mind map app: an identifier and its ordered leaves.
///
/// `id` is unique across a store. `data` keeps insertion order and new
/// leaves are always appended at the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    #[serde(default)]
    pub data: Vec<Leaf>,
}

impl App {
    /// Create an app with no leaves.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Vec::new(),
        }
    }

    /// Create an app carrying the given leaves.
    pub fn with_leaves(id: impl Into<String>, data: Vec<Leaf>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Append a leaf at the end of `data`.
    pub fn push_leaf(&mut self, leaf: Leaf) {
        self.data.push(leaf);
    }

    /// Number of leaves in this app.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the app has no leaves.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn app_without_data_defaults_to_empty() {
        let app: App = serde_json::from_value(json!({ "id": "fake-app-0" })).unwrap();
        assert_eq!(app.id, "fake-app-0");
        assert!(app.is_empty());
    }

    #[test]
    fn app_with_leaves_keeps_order() {
        let app: App = serde_json::from_value(json!({
            "id": "fake-app-0",
            "data": [
                { "path": "fake/i/like/potatoes", "text": "Because fake reasons" },
                { "path": "/this/is/a/path/1", "text": "This is a sample topic 1" },
            ]
        }))
        .unwrap();
        assert_eq!(app.len(), 2);
        assert_eq!(app.data[0], Leaf::new("fake/i/like/potatoes", "Because fake reasons"));
        assert_eq!(app.data[1], Leaf::new("/this/is/a/path/1", "This is a sample topic 1"));
    }

    #[test]
    fn app_requires_id() {
        let res: Result<App, _> = serde_json::from_value(json!({ "data": [] }));
        assert!(res.is_err());
    }

    #[test]
    fn push_leaf_appends_last() {
        let mut app = App::with_leaves("a", vec![Leaf::new("x", "1")]);
        app.push_leaf(Leaf::new("y", "2"));
        assert_eq!(app.data.last(), Some(&Leaf::new("y", "2")));
        assert_eq!(app.len(), 2);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let app = App::with_leaves("app-0", vec![Leaf::new("x/y", "z")]);
        assert_eq!(
            serde_json::to_value(&app).unwrap(),
            json!({ "id": "app-0", "data": [{ "path": "x/y", "text": "z" }] })
        );
    }
}
