use thiserror::Error;

/// Error kinds an operation can surface. Every error is terminal for its
/// request; nothing is retried service-side.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Missing or blank required text field. User-correctable.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// The referenced id does not exist in the store.
    #[error("Todo not found")]
    NotFound,

    /// Unexpected fault while handling the request. Logged server-side; the
    /// client only ever sees a generic message.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl TodoError {
    pub const TITLE_REQUIRED: &'static str = "Title is required";
    pub const TITLE_EMPTY: &'static str = "Title cannot be empty";
}
