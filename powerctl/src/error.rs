pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The process token could not be opened or adjusted, or the
    /// session-exit call was refused by the OS. Carries the formatted OS
    /// message for the underlying error code.
    #[error("privilege operation failed: {0}")]
    Privilege(String),

    /// The running platform has no facility for the requested operation.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}
