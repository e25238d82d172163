use thiserror::Error;

/// Errors raised by the persistence layer.
///
/// `Malformed` means the text itself could not be read as the line
/// layout; `Inconsistent` means the lines parsed but describe an
/// impossible tournament. Callers that want the legacy behaviour treat
/// both the same way: discard the file and start empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store (line {line}): {reason}")]
    Malformed { line: usize, reason: String },

    #[error("inconsistent store: {reason}")]
    Inconsistent { reason: String },

    #[error("cannot encode {field}: value contains a line break")]
    UnencodableField { field: String },
}

impl StoreError {
    /// True for errors that mean the file content is bad, as opposed to
    /// the file being unreadable or unwritable.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Malformed { .. } | StoreError::Inconsistent { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Malformed { line: 4, reason: "missing team name".to_string() };
        assert_eq!(err.to_string(), "malformed store (line 4): missing team name");
        assert!(err.is_corrupt());

        let err = StoreError::UnencodableField { field: "team 2 name".to_string() };
        assert_eq!(err.to_string(), "cannot encode team 2 name: value contains a line break");
        assert!(!err.is_corrupt());
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!err.is_corrupt());
    }
}
