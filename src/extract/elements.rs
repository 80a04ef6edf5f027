use serde::{Deserialize, Serialize};

// ============================================================================
// DetectedElement — one interactive UI element found by vision analysis
// ============================================================================

/// A UI element the vision model detected in a screenshot.
///
/// Every field is optional: the model occasionally omits keys, and extraction
/// preserves exactly what was present. Absent fields are shown as "N/A" at
/// display time only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedElement {
    /// input | button | dropdown | link | checkbox | textarea
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,

    /// Visible text or placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Suggested element ID or name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Suggested XPath locator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// click | enterText | select | check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

// ============================================================================
// Element extraction from free-form model output
// ============================================================================

/// Extract a JSON array of detected elements from raw model output.
///
/// Takes the span from the first `[` to the last `]` and attempts a strict
/// parse. Never fails: prose-only output, a missing array, or malformed JSON
/// all yield an empty vec.
pub fn extract_elements(text: &str) -> Vec<DetectedElement> {
    let Some(start) = text.find('[') else {
        return Vec::new();
    };
    let Some(end) = text.rfind(']') else {
        return Vec::new();
    };
    if end <= start {
        return Vec::new();
    }

    serde_json::from_str(&text[start..=end]).unwrap_or_default()
}
