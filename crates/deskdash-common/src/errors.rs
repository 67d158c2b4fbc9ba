use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the lazy window-content loader. These never reach the
/// window manager; the cache logs them and leaves the slot empty.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content not found for window: {0}")]
    NotFound(String),

    #[error("content path escapes base directory: {0}")]
    OutsideBase(PathBuf),

    #[error("content io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("no available ports found between {start} and {end}")]
    NoAvailablePort { start: u16, end: u16 },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("port file error: {0}")]
    PortFile(String),

    #[error("http error: {0}")]
    Http(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DeskdashError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Relay(#[from] RelayError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
