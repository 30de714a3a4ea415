use std::fmt::Display;
use std::fmt::Formatter;

/// Errors from the persistence layer. Handlers map these onto the wire's
/// 5xx server-error family.
#[derive(Debug)]
pub enum StoreError {
    Postgres(tokio_postgres::Error),
    /// A username or email is already taken.
    Conflict,
    NotFound,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Postgres(e) => write!(f, "store error: {e}"),
            StoreError::Conflict => write!(f, "username or email already in use"),
            StoreError::NotFound => write!(f, "no such record"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<tokio_postgres::Error> for StoreError {
    fn from(e: tokio_postgres::Error) -> Self {
        StoreError::Postgres(e)
    }
}
