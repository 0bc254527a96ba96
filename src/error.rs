use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasslistError {
    #[error("No entry named '{0}'. Run `list` to see stored names.")]
    EntryNotFound(String),

    #[error("Password must not be empty.")]
    EmptyPassword,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
