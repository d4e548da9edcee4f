//! HTTP server for the Mind map API.
//!
//! Serves the JSON app endpoints and the HTML tree view over a single
//! injected [`MindMap`](mindmap_sdk::MindMap) handle.

pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod router;
pub mod server;
pub mod view;

pub use config::{ServerConfig, DEFAULT_BIND_ADDR};
pub use openapi::openapi_spec;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::MindMapServer;
