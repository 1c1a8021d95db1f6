/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
///   - `Validation` / `Duplicate` / `NotFound` carry the message shown to clients
///   - `Store` logs the store detail and shows a sanitized message
///   - `Hash` logs the bcrypt failure and shows a sanitized message
#[derive(Debug)]
pub enum GqlError {
    Validation(String),
    Duplicate(String),
    NotFound(String),
    Store(infra::StoreError),
    Hash(anyhow::Error),
}

pub const USER_ALREADY_EXISTS: &str = "User already Exists!";
pub const CREATOR_ABSENT: &str = "Creator Absent!";

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Validation(msg) | GqlError::Duplicate(msg) | GqlError::NotFound(msg) => {
                write!(f, "{msg}")
            }
            GqlError::Store(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Store error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Hash(e) => {
                tracing::error!("Password hashing error: {e:#}");
                write!(f, "Failed to hash password")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<infra::StoreError> for GqlError {
    fn from(e: infra::StoreError) -> Self {
        match e {
            infra::StoreError::DuplicateEmail(_) => {
                GqlError::Duplicate(USER_ALREADY_EXISTS.to_string())
            }
            other => GqlError::Store(other),
        }
    }
}
