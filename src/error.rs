use std::fmt;

/// Errors raised while reading a scenario definition.
#[derive(Debug)]
pub enum ParseError {
    /// IO operation failed
    Io(std::io::Error),
    /// JSON scenario file failed to deserialize
    Json(serde_json::Error),
    /// A required directive was absent
    MissingDirective(&'static str),
    /// Invalid line or value in a scenario file
    InvalidLine(String),
    /// Ants were requested but no nest was placed
    MissingNest,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(err) => write!(f, "IO error: {}", err),
            ParseError::Json(err) => write!(f, "Invalid scenario JSON: {}", err),
            ParseError::MissingDirective(name) => write!(f, "Missing `{}` directive", name),
            ParseError::InvalidLine(msg) => write!(f, "Invalid line: {}", msg),
            ParseError::MissingNest => write!(f, "Scenario places ants but defines no nest"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
