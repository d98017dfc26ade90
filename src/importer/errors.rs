use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import error: unable to read stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("Import error: {0}")]
    Csv(csv::Error),
    #[error("Import error: invalid row [{line}]: {reason}")]
    InvalidRow {
        line: u64,
        reason: String
    }
}

impl From<csv::Error> for ImportError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_error) => Self::Io(std::io::Error::new(io_error.kind(), io_error.to_string())),
            _ => Self::Csv(error)
        }
    }
}

impl ImportError {
    pub fn invalid_row(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRow { line, reason: reason.into() }
    }
}
