use serde::{Deserialize, Serialize};

// ============================================================================
// Validation findings — typed results of the static document checks
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn error(message: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
        }
    }

    pub fn warning(message: &str) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.to_string(),
        }
    }

    pub fn info(message: &str) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
        }
    }
}

/// Outcome of validating one generated document. Derived deterministically
/// from the document text and recomputed whenever the document changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// Valid iff no Error-severity findings were recorded.
    pub fn is_valid(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages_with(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages_with(Severity::Warning)
    }

    pub fn info(&self) -> Vec<&str> {
        self.messages_with(Severity::Info)
    }

    fn messages_with(&self, severity: Severity) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.as_str())
            .collect()
    }
}
