use std::sync::Arc;

use mindmap_store::AppStore;
use mindmap_types::{App, Leaf, PrettyApp};

use crate::error::SdkResult;

/// Mind map use cases over a shared store handle.
///
/// Cloning is cheap: clones share the same store.
#[derive(Clone)]
pub struct MindMap {
    store: Arc<dyn AppStore>,
}

impl MindMap {
    pub fn new(store: Arc<dyn AppStore>) -> Self {
        Self { store }
    }

    /// Wrap a concrete store.
    pub fn from_store(store: impl AppStore + 'static) -> Self {
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &Arc<dyn AppStore> {
        &self.store
    }

    // ---- Reads ----

    pub fn list_apps(&self) -> SdkResult<Vec<App>> {
        Ok(self.store.list_apps()?)
    }

    pub fn get_app(&self, id: &str) -> SdkResult<Option<App>> {
        Ok(self.store.get_app(id)?)
    }

    /// List every app with leaf paths split into segments for tree rendering.
    ///
    /// Works on the listed copies; stored leaves keep their original paths.
    pub fn pretty_apps(&self) -> SdkResult<Vec<PrettyApp>> {
        let apps = self.store.list_apps()?;
        Ok(apps.iter().map(PrettyApp::from).collect())
    }

    // ---- Writes ----

    pub fn create_app(&self, app: App) -> SdkResult<App> {
        Ok(self.store.create_app(app)?)
    }

    pub fn add_leaf(&self, id: &str, leaf: Leaf) -> SdkResult<App> {
        Ok(self.store.add_leaf(id, leaf)?)
    }
}

impl std::fmt::Debug for MindMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MindMap").finish_non_exhaustive()
    }
}
