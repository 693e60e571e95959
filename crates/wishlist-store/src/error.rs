use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `.0` names the missing entity, e.g. "wishlist".
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("username or email already exists")]
    Conflict,

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    Invalid(&'static str),

    #[error("store lock poisoned")]
    Poisoned,
}
