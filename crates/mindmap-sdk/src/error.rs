use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Store(#[from] mindmap_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
