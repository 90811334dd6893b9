use thiserror::Error;

/// Faults a storage backend can raise.
///
/// "Not found" is not a fault: lookups report it in their return value as
/// `None` or `false` and reserve this type for actual backend trouble.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend failure: {0}")]
    Backend(String),
}
