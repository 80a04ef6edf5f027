use std::fmt;

#[derive(Debug)]
pub enum GenError {
    /// Required input missing or empty — no API call was issued
    Precondition(String),

    /// API returned a non-success HTTP status
    RequestFailed { status: u16, body: String },

    /// Transport-level failure (connection refused, DNS, timeout)
    Transport(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Precondition(msg) => {
                write!(f, "Precondition failed: {}", msg)
            }
            GenError::RequestFailed { status, body } => {
                write!(f, "API request failed with status {}: {}", status, body)
            }
            GenError::Transport(msg) => {
                write!(f, "Transport error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GenError {}

impl GenError {
    /// True when the failure is a missing-input error (no call was made).
    pub fn is_precondition(&self) -> bool {
        matches!(self, GenError::Precondition(_))
    }
}
