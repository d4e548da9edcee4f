//! Foundation types for the Mind map API.
//!
//! Every other mindmap crate depends on `mindmap-types`.
//!
//! # Key Types
//!
//! - [`Leaf`] — A path/text entry inside an app; append-only
//! - [`App`] — A named, ordered collection of leaves
//! - [`PrettyLeaf`] / [`PrettyApp`] — View-only projections with the leaf path
//!   split into segments for tree rendering

pub mod app;
pub mod leaf;
pub mod pretty;

pub use app::App;
pub use leaf::Leaf;
pub use pretty::{split_path, PrettyApp, PrettyLeaf};
