/// Result alias that carries the custom [`CrescentError`] type.
pub type Result<T> = std::result::Result<T, CrescentError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CrescentError {
    /// Free-form message, used by the platform layer to surface window and
    /// audio device failures without committing them to a taxonomy of their
    /// own.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around PNG encoding failures raised by the frame exporter.
    #[error("{0}")]
    Encode(#[from] png::EncodingError),
    /// A caller handed in a value outside the contract of an operation.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

impl CrescentError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for CrescentError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for CrescentError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
