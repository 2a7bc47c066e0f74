use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeErrorKind {
    NotFound,
    IsDirectory,
    PermissionDenied,
    InvalidArg,
    InvalidData,
    Interrupted,
    UnexpectedEof,
    OutOfMemory,
    Failed,
}

#[derive(Debug)]
pub struct MimeError {
    kind: MimeErrorKind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MimeError {
    pub fn new(kind: MimeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        kind: MimeErrorKind,
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Wraps an I/O failure on `path`, keeping the mapped kind and the underlying error.
    pub fn file_access(path: &std::path::Path, err: io::Error) -> Self {
        let kind = MimeErrorKind::from(err.kind());
        Self::with_source(
            kind,
            format!("Failed to read types file {}: {}", path.display(), err),
            Box::new(err),
        )
    }

    pub fn kind(&self) -> MimeErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for MimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &dyn std::error::Error)
    }
}

impl From<io::ErrorKind> for MimeErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => MimeErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => MimeErrorKind::PermissionDenied,
            io::ErrorKind::IsADirectory => MimeErrorKind::IsDirectory,
            io::ErrorKind::InvalidInput => MimeErrorKind::InvalidArg,
            io::ErrorKind::InvalidData => MimeErrorKind::InvalidData,
            io::ErrorKind::Interrupted => MimeErrorKind::Interrupted,
            io::ErrorKind::UnexpectedEof => MimeErrorKind::UnexpectedEof,
            io::ErrorKind::OutOfMemory => MimeErrorKind::OutOfMemory,
            _ => MimeErrorKind::Failed,
        }
    }
}

impl From<io::Error> for MimeError {
    fn from(err: io::Error) -> Self {
        let kind = MimeErrorKind::from(err.kind());
        Self::with_source(kind, err.to_string(), Box::new(err))
    }
}

pub type MimeResult<T> = Result<T, MimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_kind_mapping() {
        let err = MimeError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.kind(), MimeErrorKind::NotFound);
        assert!(err.source().is_some());

        let err = MimeError::from(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"));
        assert_eq!(err.kind(), MimeErrorKind::InvalidData);

        let err = MimeError::from(io::Error::new(io::ErrorKind::WouldBlock, "busy"));
        assert_eq!(err.kind(), MimeErrorKind::Failed);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = MimeError::new(MimeErrorKind::InvalidArg, "empty extension list");
        assert_eq!(err.to_string(), "InvalidArg: empty extension list");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_file_access_names_path() {
        let path = std::path::Path::new("/nonexistent/mime.types");
        let err = MimeError::file_access(path, io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(err.kind(), MimeErrorKind::NotFound);
        assert!(err.message().contains("/nonexistent/mime.types"));
    }
}
