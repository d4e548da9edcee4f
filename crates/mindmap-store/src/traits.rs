use mindmap_types::{App, Leaf};

use crate::error::StoreResult;

/// Storage backend for mind map apps.
///
/// All implementations must satisfy these invariants:
/// - App ids are unique across the store.
/// - `list_apps` returns apps in creation order.
/// - Leaves appended to an app keep their append order.
/// - A failed operation leaves the store unchanged.
pub trait AppStore: Send + Sync {
    /// Read every stored app, in creation order.
    fn list_apps(&self) -> StoreResult<Vec<App>>;

    /// Read an app by id.
    ///
    /// Returns `Ok(None)` if no app has this id.
    fn get_app(&self, id: &str) -> StoreResult<Option<App>>;

    /// Store a new app exactly as given, leaves included, and return it.
    ///
    /// Fails with [`StoreError::DuplicateApp`](crate::StoreError::DuplicateApp)
    /// if the id is taken.
    fn create_app(&self, app: App) -> StoreResult<App>;

    /// Append a leaf to an app and return the app as stored afterwards.
    ///
    /// Fails with [`StoreError::AppNotFound`](crate::StoreError::AppNotFound)
    /// if no app has this id.
    fn add_leaf(&self, id: &str, leaf: Leaf) -> StoreResult<App>;
}
