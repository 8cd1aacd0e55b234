/// A line did not hold what the caller asked for.
///
/// Harnesses are expected to send well-formed input, so these are fatal:
/// they travel up to `main` and end the process with a failure status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Asked for field `index` of a line with only `count` fields.
    Exhausted { index: usize, count: usize },
    /// `token` does not parse as the requested kind of value.
    Malformed { token: String, kind: &'static str },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { index, count } => {
                write!(f, "no field at index {} (line has {})", index, count)
            }
            Self::Malformed { token, kind } => write!(f, "{:?} is not a valid {}", token, kind),
        }
    }
}

impl std::error::Error for FieldError {}
