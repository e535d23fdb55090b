use thiserror::Error;

// Type alias for Result with our BootstrapError
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Connection establishment or schema statement failure. The two are
    /// not distinguished; either one aborts the bootstrap.
    #[error("Connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid database configuration: {0}")]
    Config(String),
}
