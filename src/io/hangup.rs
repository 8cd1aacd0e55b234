/// The harness is gone: stdin reached its end or a pipe broke.
///
/// In a match this is how the game ends, so it is not a failure.
/// Lifecycle calls propagate it like any other error and
/// [`Hangup::absorb`] turns it back into a clean return at the top level.
#[derive(Debug)]
pub enum Hangup {
    /// End of stream before the first byte of a line.
    Closed,
    /// Reading or writing the protocol streams failed.
    Broken(std::io::Error),
}

impl Hangup {
    /// Top-level guard: a hangup anywhere in the error chain ends the run
    /// normally, every other error passes through.
    pub fn absorb<T>(result: anyhow::Result<T>) -> anyhow::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if Self::caused(&e) => {
                log::info!("harness hung up: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether this error, or anything it wraps, is a hangup.
    pub fn caused(error: &anyhow::Error) -> bool {
        error.chain().any(|cause| cause.is::<Self>())
    }
}

impl From<std::io::Error> for Hangup {
    fn from(e: std::io::Error) -> Self {
        Self::Broken(e)
    }
}

impl std::fmt::Display for Hangup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "input closed"),
            Self::Broken(e) => write!(f, "pipe broken: {}", e),
        }
    }
}

impl std::error::Error for Hangup {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Closed => None,
            Self::Broken(e) => Some(e),
        }
    }
}
