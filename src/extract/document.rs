// ============================================================================
// Document extraction — strip markdown fences the model sometimes adds
// ============================================================================

/// Extract the XML document from raw model output.
///
/// The model is instructed to return bare XML but often wraps it in a
/// markdown code fence anyway. Preference order: the inner content of an
/// "xml"-labeled fence, else of a generic fence, else the whole text. The
/// result is always trimmed.
pub fn extract_document(raw: &str) -> String {
    if let Some(inner) = fenced_block(raw, "```xml\n") {
        return inner.trim().to_string();
    }
    if let Some(inner) = fenced_block(raw, "```\n") {
        return inner.trim().to_string();
    }
    raw.trim().to_string()
}

/// Content between `opener` and the next closing fence, if both are present.
fn fenced_block<'a>(text: &'a str, opener: &str) -> Option<&'a str> {
    let start = text.find(opener)? + opener.len();
    let end = text[start..].find("\n```")?;
    Some(&text[start..start + end])
}
