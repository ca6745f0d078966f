/// Error type for the Core module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error when serializing or deserializing JSON data
    #[error("Json error: {0}")]
    SerdeError(#[from] serde_json::Error),
    /// Error raised while consolidating storage layouts
    #[error("Layout error: {0}")]
    LayoutError(#[from] stowage_layout::Error),
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
}
