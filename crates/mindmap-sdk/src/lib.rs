//! Use-case layer for the Mind map API.
//!
//! [`MindMap`] is the single entry point the HTTP layer talks to. It wraps
//! any [`AppStore`] and adds nothing but the pretty projection used by the
//! tree view.

pub mod error;
pub mod mindmap;

pub use error::{SdkError, SdkResult};
pub use mindmap::MindMap;

// Re-export key types
pub use mindmap_store::{AppStore, InMemoryAppStore, StoreError};
pub use mindmap_types::{App, Leaf, PrettyApp, PrettyLeaf};
