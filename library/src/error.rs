use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Audio file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to read audio stream: {0}")]
    ReadFailure(String),
}

impl DecodeError {
    pub(crate) fn from_open(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DecodeError::NotFound(path),
            _ => DecodeError::ReadFailure(format!("{}: {}", path.display(), err)),
        }
    }

    // Errors raised while probing the container. The probe scan itself
    // swallows read errors, so I/O errors here come from the matched format
    // reader parsing its header; a header cut short is not a usable container.
    pub(crate) fn from_probe(err: symphonia::core::errors::Error) -> Self {
        use symphonia::core::errors::Error;
        match err {
            Error::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                DecodeError::UnsupportedFormat("no recognized container found".to_string())
            }
            Error::IoError(e) => DecodeError::ReadFailure(e.to_string()),
            Error::Unsupported(msg) => DecodeError::UnsupportedFormat(msg.to_string()),
            other => DecodeError::UnsupportedFormat(other.to_string()),
        }
    }

    pub(crate) fn not_a_file(path: &std::path::Path) -> Self {
        DecodeError::ReadFailure(format!("{}: not a regular file", path.display()))
    }
}

impl From<symphonia::core::errors::Error> for DecodeError {
    fn from(err: symphonia::core::errors::Error) -> Self {
        use symphonia::core::errors::Error;
        match err {
            Error::Unsupported(msg) => DecodeError::UnsupportedFormat(msg.to_string()),
            other => DecodeError::ReadFailure(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use symphonia::core::errors::Error;

    #[test]
    fn test_open_errors() {
        let path = PathBuf::from("a.wav");
        let err = DecodeError::from_open(path.clone(), io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, DecodeError::NotFound(p) if p == path));
        let err = DecodeError::from_open(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, DecodeError::ReadFailure(_)));
    }

    #[test]
    fn test_probe_errors() {
        let err = DecodeError::from_probe(Error::Unsupported("core (probe): no suitable format reader found"));
        assert!(matches!(err, DecodeError::UnsupportedFormat(_)));
        let err = DecodeError::from_probe(Error::IoError(io::Error::from(io::ErrorKind::UnexpectedEof)));
        assert!(matches!(err, DecodeError::UnsupportedFormat(_)));
        let err = DecodeError::from_probe(Error::IoError(io::Error::other("device gone")));
        assert!(matches!(err, DecodeError::ReadFailure(_)));
        let err = DecodeError::from_probe(Error::DecodeError("wav: malformed fmt chunk"));
        assert!(matches!(err, DecodeError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_packet_errors_are_read_failures() {
        let err = DecodeError::from(Error::DecodeError("mpa: invalid main_data offset"));
        assert!(matches!(err, DecodeError::ReadFailure(_)));
        let err = DecodeError::from(Error::IoError(io::Error::other("read interrupted")));
        assert!(matches!(err, DecodeError::ReadFailure(_)));
        let err = DecodeError::from(Error::Unsupported("codec not enabled"));
        assert!(matches!(err, DecodeError::UnsupportedFormat(_)));
    }
}
