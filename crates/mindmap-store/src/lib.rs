//! App storage for the Mind map API.
//!
//! # Storage Backends
//!
//! All backends implement the [`AppStore`] trait:
//!
//! - [`InMemoryAppStore`] -- `Vec`-backed store living for the process
//!   lifetime, optionally seeded with [`sample_apps`]
//!
//! # Design Rules
//!
//! 1. App ids are unique within a store at all times.
//! 2. Leaves are append-only: never edited, reordered or removed.
//! 3. Looking up an unknown id is `Ok(None)`, not an error.
//! 4. Each operation is atomic with respect to the others.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{sample_apps, InMemoryAppStore};
pub use traits::AppStore;
