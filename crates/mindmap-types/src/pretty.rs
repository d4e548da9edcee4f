//! View-only projections used by the HTML tree page.
//!
//! A [`PrettyApp`] mirrors an [`App`] with every leaf path split into its
//! segments. Projections are built from borrowed apps and never written back.

use serde::Serialize;

use crate::app::App;
use crate::leaf::Leaf;

/// Split a leaf path into its non-empty segments.
///
/// A single leading `/` is stripped before splitting, so `"/a/b"` and
/// `"a/b"` project to the same segments. Empty segments are dropped.
pub fn split_path(path: &str) -> Vec<String> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrettyLeaf {
    pub path: Vec<String>,
    pub text: Option<String>,
}

impl From<&Leaf> for PrettyLeaf {
    fn from(leaf: &Leaf) -> Self {
        Self {
            path: leaf.path.as_deref().map(split_path).unwrap_or_default(),
            text: leaf.text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrettyApp {
    pub id: String,
    pub data: Vec<PrettyLeaf>,
}

impl From<&App> for PrettyApp {
    fn from(app: &App) -> Self {
        Self {
            id: app.id.clone(),
            data: app.data.iter().map(PrettyLeaf::from).collect(),
        }
    }
}
