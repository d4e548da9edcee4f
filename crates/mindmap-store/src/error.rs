/// Errors from app store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// An app with this id is already stored.
    #[error("App with id: {0} already exists in database.")]
    DuplicateApp(String),

    /// No app with this id is stored.
    #[error("App with id: {0} does not exist in database.")]
    AppNotFound(String),

    /// The store lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
