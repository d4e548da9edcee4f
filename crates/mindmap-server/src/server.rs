use mindmap_sdk::{InMemoryAppStore, MindMap};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Mind map API server.
pub struct MindMapServer {
    config: ServerConfig,
    mindmap: MindMap,
}

impl MindMapServer {
    /// Create a server over a fresh in-memory store, seeded per `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_sample_apps {
            InMemoryAppStore::with_sample_apps()
        } else {
            InMemoryAppStore::new()
        };
        Self::with_mindmap(config, MindMap::from_store(store))
    }

    /// Create a server over an existing store handle.
    pub fn with_mindmap(config: ServerConfig, mindmap: MindMap) -> Self {
        Self { config, mindmap }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn mindmap(&self) -> &MindMap {
        &self.mindmap
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.mindmap.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.mindmap);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Mind map API listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
