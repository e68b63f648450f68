/// Convenience result type used across phanim.
pub type PhanimResult<T> = Result<T, PhanimError>;

/// Top-level error taxonomy used by phanim APIs.
///
/// Building objects and scenes never fails; only persisting a scene does.
#[derive(thiserror::Error, Debug)]
pub enum PhanimError {
    /// Open, write, flush or sync failure while persisting a scene.
    ///
    /// The wrapped error is the one reported by the operating system, unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error that carries additional context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhanimError {
    /// Kind of the underlying I/O failure, if this error came straight from IO.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            Self::Other(e) => e.downcast_ref::<std::io::Error>().map(|e| e.kind()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
