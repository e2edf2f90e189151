use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Rate requested over a zero-length run.
    Division,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Division => write!(f, "division by zero duration"),
        }
    }
}

impl std::error::Error for CoreError {}

pub type CoreResult<T, E = CoreError> = core::result::Result<T, E>;
