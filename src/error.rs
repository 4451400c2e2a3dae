use thiserror::Error;

/// Failure category of a run.
///
/// Malformed numeric fields are not represented here: they are recovered with a
/// default where they are parsed and never abort a run. Bad CLI arguments are
/// reported by clap, which exits with status 2 before a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source could not be retrieved, staged, or parsed.
    SourceUnavailable,
    /// Reconciled data violates an internal invariant.
    DataIntegrity,
    /// The artifact could not be written.
    Output,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::SourceUnavailable => 4,
            ErrorKind::DataIntegrity => 5,
            ErrorKind::Output => 6,
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceUnavailable, message)
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataIntegrity, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Output, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}
