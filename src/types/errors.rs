use thiserror::Error;

// === ViewError ===

/// Errors related to embedded view registration and creation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A factory is already registered under the given view type.
    #[error("View type already registered: {0}")]
    AlreadyRegistered(String),
    /// No factory is registered under the given view type.
    #[error("Unknown view type: {0}")]
    UnknownViewType(String),
}

// === FullscreenError ===

/// Errors raised by the host document when changing fullscreen state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FullscreenError {
    /// The host refused the request.
    #[error("Fullscreen request denied: {0}")]
    Denied(String),
    /// The host does not support fullscreen.
    #[error("Fullscreen unsupported: {0}")]
    Unsupported(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === IpcError ===

/// Errors decoding messages posted by the page.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The message body is not a recognised command.
    #[error("Malformed IPC message: {0}")]
    Malformed(#[from] serde_json::Error),
}
