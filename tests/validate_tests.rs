use provar_testgen::validate::rules::{
    check_assertions, check_locators, check_root_element, check_sf_actions, check_step_count,
    check_steps_element, check_summary, check_wait_conditions, check_xml_declaration,
    validate_document,
};

// ============================================================================
// Sample documents
// ============================================================================

const COMPLETE_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testCase id="SF_Login_Test">
  <summary>Login and verify dashboard</summary>
  <description>Logs in with valid credentials and checks the dashboard loads</description>
  <steps>
    <step id="1" action="SfNavigate">
      <url>https://login.salesforce.com</url>
      <waitForPageLoad>true</waitForPageLoad>
    </step>
    <step id="2" action="SfEnterText">
      <locator type="Id">username</locator>
      <text>user@example.com</text>
    </step>
    <step id="3" action="SfVerify">
      <locator type="XPath">//div[contains(text(),'Dashboard')]</locator>
      <expected>visible</expected>
    </step>
  </steps>
</testCase>"#;

// ============================================================================
// 1. Complete document passes
// ============================================================================

#[test]
fn complete_document_is_valid() {
    let report = validate_document(COMPLETE_DOC);
    assert!(report.is_valid());
    assert!(report.errors().is_empty());
}

#[test]
fn complete_document_info_entries() {
    let report = validate_document(COMPLETE_DOC);
    let info = report.info();
    assert!(info.contains(&"Contains Salesforce-specific Provar actions"));
    assert!(info.contains(&"Contains element locators"));
    // <steps> itself matches the literal "<step" scan, so 3 steps report as 4
    assert!(info.contains(&"Contains 4 test steps"));
    assert!(info.contains(&"Includes wait conditions"));
    assert!(info.contains(&"Includes verification/assertions"));
}

// ============================================================================
// 2. Required elements
// ============================================================================

#[test]
fn missing_root_element_is_error() {
    let doc = "<?xml version=\"1.0\"?>\n<steps>\n</steps>";
    let report = validate_document(doc);
    assert!(!report.is_valid());
    assert!(report.errors().contains(&"Missing <testCase> root element"));
}

#[test]
fn missing_steps_element_is_error() {
    let doc = "<?xml version=\"1.0\"?>\n<testCase id=\"T\"></testCase>";
    let report = validate_document(doc);
    assert!(!report.is_valid());
    assert!(report.errors().contains(&"Missing <steps> element"));
}

#[test]
fn missing_declaration_and_summary_are_warnings_only() {
    let doc = "<testCase id=\"T\">\n  <steps>\n    <step id=\"1\" action=\"SfNavigate\"/>\n  </steps>\n</testCase>";
    let report = validate_document(doc);
    assert!(report.is_valid());
    assert!(report.warnings().contains(&"Missing XML declaration"));
    assert!(report.warnings().contains(&"Missing <summary> element"));
}

#[test]
fn empty_document_collects_both_errors() {
    let report = validate_document("");
    assert!(!report.is_valid());
    assert_eq!(
        report.errors(),
        vec!["Missing <testCase> root element", "Missing <steps> element"]
    );
    assert!(report.info().is_empty());
}

// ============================================================================
// 3. Salesforce action scanning
// ============================================================================

#[test]
fn sf_action_presence_is_info_not_warning() {
    let doc = "<testCase><steps><step action=\"SfClick\"/></steps></testCase>";
    let report = validate_document(doc);
    assert!(
        report
            .info()
            .contains(&"Contains Salesforce-specific Provar actions")
    );
    assert!(
        !report.warnings().iter().any(|w| w.starts_with(
            "No Salesforce-specific actions found"
        ))
    );
}

#[test]
fn generic_actions_trigger_warning() {
    let doc = "<testCase><steps><step action=\"click\"/></steps></testCase>";
    let report = validate_document(doc);
    assert!(report.warnings().contains(
        &"No Salesforce-specific actions found. Generic actions may not work in Provar."
    ));
}

// ============================================================================
// 4. Locators, steps, waits, assertions
// ============================================================================

#[test]
fn missing_locators_is_warning() {
    let doc = "<testCase><steps><step action=\"SfWait\"/></steps></testCase>";
    let report = validate_document(doc);
    assert!(report.warnings().contains(&"No element locators found"));
}

#[test]
fn step_count_is_literal_substring_count() {
    // Two <step elements plus the <steps> container itself
    let doc = "<steps><step id=\"1\"/><step id=\"2\"/></steps>";
    let report = validate_document(doc);
    assert!(report.info().contains(&"Contains 3 test steps"));
}

#[test]
fn wait_for_page_load_counts_as_wait_condition() {
    let doc = "<testCase><steps><step><waitForPageLoad>true</waitForPageLoad></step></steps></testCase>";
    let report = validate_document(doc);
    assert!(report.info().contains(&"Includes wait conditions"));
}

#[test]
fn generic_assert_counts_as_verification() {
    let doc = "<testCase><steps><step action=\"AssertTitle\"/></steps></testCase>";
    let report = validate_document(doc);
    assert!(report.info().contains(&"Includes verification/assertions"));
}

// ============================================================================
// 5. Purity
// ============================================================================

#[test]
fn validation_is_idempotent() {
    let first = validate_document(COMPLETE_DOC);
    let second = validate_document(COMPLETE_DOC);
    assert_eq!(first, second);
}

// ============================================================================
// 6. Rules in isolation
// ============================================================================

#[test]
fn rules_can_be_invoked_individually() {
    assert!(check_xml_declaration("<?xml version=\"1.0\"?>").is_none());
    assert!(check_xml_declaration("<testCase/>").is_some());

    assert!(check_root_element("<testCase id=\"T\">").is_none());
    assert!(check_root_element("<other/>").is_some());

    assert!(check_summary("<summary>s</summary>").is_none());
    assert!(check_steps_element("<steps></steps>").is_none());

    assert!(check_sf_actions("SfLogin").is_some());
    assert!(check_locators("<locator type=\"Id\">x</locator>").is_some());
    assert!(check_step_count("no steps here").is_none());
    assert!(check_wait_conditions("SfWait").is_some());
    assert!(check_assertions("SfVerify").is_some());
}
