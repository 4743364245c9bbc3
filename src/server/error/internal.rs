use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 rejected its input or produced an unreadable hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task panicked or was cancelled.
    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),
}
