use crate::generate::request::GenerationRequest;

// ============================================================================
// Vision prompt — element detection from a screenshot
// ============================================================================

/// Fixed instruction for the vision call. The model must answer with nothing
/// but a JSON array matching the `DetectedElement` schema.
pub const VISION_PROMPT: &str = r#"Analyze this Salesforce UI screenshot and identify all interactive elements.

Return ONLY a JSON array with this exact format (no other text):
[
  {
    "type": "input|button|dropdown|link|checkbox|textarea",
    "label": "visible text or placeholder",
    "id": "suggested element ID or name",
    "xpath": "suggested xpath locator",
    "action": "click|enterText|select|check"
  }
]

Focus on:
- Input fields (text, email, password)
- Buttons (submit, cancel, save, etc.)
- Dropdowns/select boxes
- Checkboxes and radio buttons
- Links and navigation elements"#;

// ============================================================================
// Generation prompt — Provar test case from metadata, elements, and DOM
// ============================================================================

/// Build the single-turn generation prompt.
///
/// Concatenates: test metadata, an optional detected-elements JSON block, an
/// optional DOM block, the closed Provar action vocabulary, the locator
/// preference order, the required XML template, and a closing instruction to
/// return only XML. `timestamp` is injected so the builder stays pure.
pub fn build_generation_prompt(request: &GenerationRequest, timestamp: &str) -> String {
    let elements_info = if request.detected_elements.is_empty() {
        String::new()
    } else {
        let json = serde_json::to_string_pretty(&request.detected_elements)
            .unwrap_or_else(|_| "[]".to_string());
        format!("\n**Detected UI Elements from Screenshots:**\n{}\n", json)
    };

    let dom_info = match request.dom_html.as_deref() {
        Some(dom) if !dom.trim().is_empty() => format!("\n**Page DOM/HTML:**\n{}\n", dom),
        _ => String::new(),
    };

    let url = request
        .url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or("Salesforce Login Page");

    format!(
        r#"You are a Provar test automation expert for Salesforce. Generate a complete, production-ready Provar test case in XML format.

**Test Details:**
- Test Name: {test_name}
- URL: {url}
- Description: {description}

{elements_info}
{dom_info}

**CRITICAL REQUIREMENTS:**

1. **Use ONLY Salesforce-specific Provar actions:**
   - SfLogin (for login)
   - SfNavigate (for navigation)
   - SfClick (for clicking elements)
   - SfEnterText (for entering text)
   - SfSelect (for dropdowns)
   - SfVerify (for assertions)
   - SfWait (for waiting)

2. **Locator Strategy (in order of preference):**
   - Id (most reliable)
   - Name
   - XPath (for complex elements)
   - CSS Selector (as fallback)

3. **Include proper structure:**
   - Test case ID (use test_name without spaces)
   - Summary
   - Description
   - Steps with sequential IDs
   - Proper XML formatting

4. **Best Practices:**
   - Add SfWait after page navigation
   - Use explicit waits before interactions
   - Include assertions after critical actions
   - Add error handling steps
   - Use descriptive step names

**Required XML Structure:**
```xml
<?xml version="1.0" encoding="UTF-8"?>
<testCase id="TestCaseId">
  <summary>Brief summary</summary>
  <description>Detailed description</description>
  <steps>
    <step id="1" action="SfNavigate">
      <url>URL_HERE</url>
      <waitForPageLoad>true</waitForPageLoad>
    </step>
    <step id="2" action="SfWait">
      <timeout>5000</timeout>
    </step>
    <step id="3" action="SfClick">
      <locator type="Id">elementId</locator>
      <description>Click element description</description>
    </step>
    <step id="4" action="SfEnterText">
      <locator type="Id">inputFieldId</locator>
      <text>value_to_enter</text>
      <description>Enter text description</description>
    </step>
    <step id="5" action="SfVerify">
      <locator type="XPath">//div[contains(text(),'Success')]</locator>
      <expected>visible</expected>
      <description>Verify success message</description>
    </step>
  </steps>
  <metadata>
    <generatedBy>Provar AI Generator</generatedBy>
    <timestamp>{timestamp}</timestamp>
    <version>1.0</version>
  </metadata>
</testCase>
```

**Generate the complete Provar XML test case now. Return ONLY the XML code, no explanations or markdown.**"#,
        test_name = request.test_name,
        url = url,
        description = request.description,
        elements_info = elements_info,
        dom_info = dom_info,
        timestamp = timestamp,
    )
}
