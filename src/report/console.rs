use crate::validate::finding::ValidationReport;

// ============================================================================
// Console reporter — formatted terminal output for validation results
// ============================================================================

/// Format a validation report for terminal output.
///
/// Produces output like:
/// ```text
/// === Validation: PASSED ===
///
/// Warnings:
///   [WARN] Missing XML declaration
///
/// Info:
///   [INFO] Contains 6 test steps
/// ```
pub fn format_validation_report(report: &ValidationReport) -> String {
    let mut out = String::new();

    let verdict = if report.is_valid() { "PASSED" } else { "FAILED" };
    out.push_str(&format!("=== Validation: {} ===\n", verdict));

    let errors = report.errors();
    let warnings = report.warnings();
    let info = report.info();

    if !errors.is_empty() {
        out.push_str("\nErrors:\n");
        for message in errors {
            out.push_str(&format!("  [ERROR] {}\n", message));
        }
    }

    if !warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for message in warnings {
            out.push_str(&format!("  [WARN] {}\n", message));
        }
    }

    if !info.is_empty() {
        out.push_str("\nInfo:\n");
        for message in info {
            out.push_str(&format!("  [INFO] {}\n", message));
        }
    }

    out
}
