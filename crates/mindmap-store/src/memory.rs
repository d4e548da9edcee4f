//! In-memory app store.
//!
//! [`InMemoryAppStore`] keeps all apps in a `Vec` protected by a `RwLock`.
//! Lookups are linear scans by id. Data is lost when the store is dropped.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mindmap_types::{App, Leaf};

use crate::error::{StoreError, StoreResult};
use crate::traits::AppStore;

/// The apps a freshly started server is seeded with.
pub fn sample_apps() -> Vec<App> {
    ["app-0", "app-1"]
        .into_iter()
        .map(|id| {
            App::with_leaves(
                id,
                vec![
                    Leaf::new("i/like/potatoes", "Because reasons"),
                    Leaf::new("/this/is/a/path/1", "This is a sample topic 1"),
                ],
            )
        })
        .collect()
}

/// An in-memory implementation of [`AppStore`].
///
/// Every operation holds the lock for its full duration, so concurrent
/// creates and appends never lose updates.
pub struct InMemoryAppStore {
    apps: RwLock<Vec<App>>,
}

impl InMemoryAppStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::from_apps(Vec::new())
    }

    /// Create a store seeded with the given apps, kept in order.
    ///
    /// When an id repeats, the first app wins and later ones are dropped.
    pub fn from_apps(apps: Vec<App>) -> Self {
        let mut unique: Vec<App> = Vec::with_capacity(apps.len());
        for app in apps {
            if unique.iter().any(|kept| kept.id == app.id) {
                tracing::warn!(app_id = %app.id, "dropped duplicate seed app");
                continue;
            }
            unique.push(app);
        }
        Self {
            apps: RwLock::new(unique),
        }
    }

    /// Create a store seeded with [`sample_apps`].
    pub fn with_sample_apps() -> Self {
        Self::from_apps(sample_apps())
    }

    /// Number of apps currently stored.
    ///
    /// Reads through a poisoned lock: appends are single pushes, so the
    /// vector is never left half-written.
    pub fn len(&self) -> usize {
        self.apps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if the store holds no app.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_apps(&self) -> StoreResult<RwLockReadGuard<'_, Vec<App>>> {
        self.apps
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_apps(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<App>>> {
        self.apps
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryAppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore for InMemoryAppStore {
    fn list_apps(&self) -> StoreResult<Vec<App>> {
        Ok(self.read_apps()?.clone())
    }

    fn get_app(&self, id: &str) -> StoreResult<Option<App>> {
        let apps = self.read_apps()?;
        Ok(apps.iter().find(|app| app.id == id).cloned())
    }

    fn create_app(&self, app: App) -> StoreResult<App> {
        let mut apps = self.write_apps()?;
        if apps.iter().any(|existing| existing.id == app.id) {
            tracing::warn!(app_id = %app.id, "rejected duplicate app");
            return Err(StoreError::DuplicateApp(app.id));
        }
        tracing::debug!(app_id = %app.id, leaves = app.len(), "created app");
        apps.push(app.clone());
        Ok(app)
    }

    fn add_leaf(&self, id: &str, leaf: Leaf) -> StoreResult<App> {
        let mut apps = self.write_apps()?;
        match apps.iter_mut().find(|app| app.id == id) {
            Some(app) => {
                app.push_leaf(leaf);
                tracing::debug!(app_id = %id, leaves = app.len(), "appended leaf");
                Ok(app.clone())
            }
            None => {
                tracing::warn!(app_id = %id, "leaf append on unknown app");
                Err(StoreError::AppNotFound(id.to_owned()))
            }
        }
    }
}

impl std::fmt::Debug for InMemoryAppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAppStore")
            .field("app_count", &self.len())
            .finish()
    }
}
