use provar_testgen::extract::document::extract_document;
use provar_testgen::extract::elements::extract_elements;

// ============================================================================
// 1. Element extraction — well-formed arrays
// ============================================================================

#[test]
fn extracts_elements_from_plain_array() {
    let text = r#"[
  {"type": "input", "label": "Username", "id": "username", "xpath": "//input[@id='username']", "action": "enterText"},
  {"type": "button", "label": "Log In", "id": "Login", "xpath": "//input[@id='Login']", "action": "click"}
]"#;

    let elements = extract_elements(text);
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].element_type.as_deref(), Some("input"));
    assert_eq!(elements[0].action.as_deref(), Some("enterText"));
    assert_eq!(elements[1].label.as_deref(), Some("Log In"));
    assert_eq!(elements[1].action.as_deref(), Some("click"));
}

#[test]
fn extracts_elements_surrounded_by_prose() {
    let text = r#"Here are the interactive elements I found:

[{"type": "checkbox", "label": "Remember me", "action": "check"}]

Let me know if you need more detail."#;

    let elements = extract_elements(text);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].element_type.as_deref(), Some("checkbox"));
}

#[test]
fn extraction_preserves_insertion_order() {
    let text = r#"[{"label": "First"}, {"label": "Second"}, {"label": "Third"}]"#;
    let labels: Vec<_> = extract_elements(text)
        .into_iter()
        .map(|e| e.label.unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["First", "Second", "Third"]);
}

// ============================================================================
// 2. Element extraction — missing keys stay absent
// ============================================================================

#[test]
fn missing_keys_stay_absent() {
    let elements = extract_elements(r#"[{"label": "Save"}]"#);
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].label.as_deref(), Some("Save"));
    assert!(elements[0].element_type.is_none());
    assert!(elements[0].id.is_none());
    assert!(elements[0].xpath.is_none());
    assert!(elements[0].action.is_none());
}

#[test]
fn absent_keys_are_not_serialized() {
    let elements = extract_elements(r#"[{"label": "Save"}]"#);
    let json = serde_json::to_string(&elements[0]).unwrap();
    assert_eq!(json, r#"{"label":"Save"}"#);
}

// ============================================================================
// 3. Element extraction — degraded inputs yield empty, never error
// ============================================================================

#[test]
fn malformed_json_yields_empty() {
    assert!(extract_elements("[{not valid json}]").is_empty());
}

#[test]
fn no_array_yields_empty() {
    assert!(extract_elements("I could not identify any elements.").is_empty());
    assert!(extract_elements("").is_empty());
}

#[test]
fn unbalanced_brackets_yield_empty() {
    assert!(extract_elements("see [1 for details").is_empty());
    assert!(extract_elements("] backwards [").is_empty());
}

#[test]
fn array_of_non_objects_yields_empty() {
    assert!(extract_elements("[1, 2, 3]").is_empty());
}

// ============================================================================
// 4. Document extraction — fence stripping
// ============================================================================

const SAMPLE_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testCase id=\"T\">\n  <steps>\n  </steps>\n</testCase>";

#[test]
fn strips_labeled_xml_fence() {
    let raw = format!("```xml\n{}\n```", SAMPLE_XML);
    assert_eq!(extract_document(&raw), SAMPLE_XML);
}

#[test]
fn strips_labeled_fence_with_surrounding_prose() {
    // Scenario C: extra prose plus a labeled fence — prose is discarded
    let raw = format!(
        "Here is the generated test case:\n\n```xml\n{}\n```\n\nLet me know if you'd like changes.",
        SAMPLE_XML
    );
    assert_eq!(extract_document(&raw), SAMPLE_XML);
}

#[test]
fn strips_generic_fence() {
    let raw = format!("```\n{}\n```", SAMPLE_XML);
    assert_eq!(extract_document(&raw), SAMPLE_XML);
}

#[test]
fn labeled_fence_preferred_over_generic() {
    let raw = format!("```\nnot the document\n```\n```xml\n{}\n```", SAMPLE_XML);
    assert_eq!(extract_document(&raw), SAMPLE_XML);
}

#[test]
fn unfenced_document_passes_through_trimmed() {
    let raw = format!("\n\n  {}  \n", SAMPLE_XML);
    assert_eq!(extract_document(&raw), SAMPLE_XML);
}

#[test]
fn fenced_round_trip_equals_trimmed_inner() {
    // Round-trip property: fencing then extracting returns the original
    let fenced = format!("```xml\n{}\n```", SAMPLE_XML);
    assert_eq!(extract_document(&fenced), extract_document(SAMPLE_XML));
}

#[test]
fn empty_input_yields_empty_document() {
    assert_eq!(extract_document(""), "");
    assert_eq!(extract_document("   \n  "), "");
}
