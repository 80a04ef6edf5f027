use crate::validate::finding::{Finding, ValidationReport};

// ============================================================================
// Static validation of generated Provar test cases
//
// Deliberately substring-based rather than a real XML parse: the model can
// emit malformed documents, and the checks must still report on them instead
// of failing outright. Each rule is a named function so it can be tested in
// isolation.
// ============================================================================

/// The closed set of Salesforce-specific Provar actions the generated
/// document is expected to use exclusively.
pub const SF_ACTIONS: [&str; 7] = [
    "SfNavigate",
    "SfClick",
    "SfEnterText",
    "SfVerify",
    "SfLogin",
    "SfWait",
    "SfSelect",
];

/// Run every rule against the document text.
pub fn validate_document(xml: &str) -> ValidationReport {
    let rules: [fn(&str) -> Option<Finding>; 9] = [
        check_xml_declaration,
        check_root_element,
        check_summary,
        check_steps_element,
        check_sf_actions,
        check_locators,
        check_step_count,
        check_wait_conditions,
        check_assertions,
    ];

    ValidationReport {
        findings: rules.iter().filter_map(|rule| rule(xml)).collect(),
    }
}

// ============================================================================
// Individual rules
// ============================================================================

/// Warn when the document does not open with an XML declaration.
pub fn check_xml_declaration(xml: &str) -> Option<Finding> {
    if xml.starts_with("<?xml") {
        None
    } else {
        Some(Finding::warning("Missing XML declaration"))
    }
}

/// The `<testCase>` root element is required.
pub fn check_root_element(xml: &str) -> Option<Finding> {
    if xml.contains("<testCase") {
        None
    } else {
        Some(Finding::error("Missing <testCase> root element"))
    }
}

pub fn check_summary(xml: &str) -> Option<Finding> {
    if xml.contains("<summary>") {
        None
    } else {
        Some(Finding::warning("Missing <summary> element"))
    }
}

/// The `<steps>` container is required.
pub fn check_steps_element(xml: &str) -> Option<Finding> {
    if xml.contains("<steps>") {
        None
    } else {
        Some(Finding::error("Missing <steps> element"))
    }
}

/// Documents without Sf-prefixed actions likely used generic automation
/// primitives, which Provar will not accept.
pub fn check_sf_actions(xml: &str) -> Option<Finding> {
    if SF_ACTIONS.iter().any(|action| xml.contains(action)) {
        Some(Finding::info("Contains Salesforce-specific Provar actions"))
    } else {
        Some(Finding::warning(
            "No Salesforce-specific actions found. Generic actions may not work in Provar.",
        ))
    }
}

pub fn check_locators(xml: &str) -> Option<Finding> {
    if xml.contains("<locator") {
        Some(Finding::info("Contains element locators"))
    } else {
        Some(Finding::warning("No element locators found"))
    }
}

/// Literal count of `<step` occurrences; the `<steps>` container itself
/// matches too, which matches the count the tool has always reported.
pub fn check_step_count(xml: &str) -> Option<Finding> {
    let count = xml.matches("<step").count();
    if count > 0 {
        Some(Finding::info(&format!("Contains {} test steps", count)))
    } else {
        None
    }
}

pub fn check_wait_conditions(xml: &str) -> Option<Finding> {
    if xml.contains("SfWait") || xml.contains("waitForPageLoad") {
        Some(Finding::info("Includes wait conditions"))
    } else {
        None
    }
}

pub fn check_assertions(xml: &str) -> Option<Finding> {
    if xml.contains("SfVerify") || xml.contains("Assert") {
        Some(Finding::info("Includes verification/assertions"))
    } else {
        None
    }
}
