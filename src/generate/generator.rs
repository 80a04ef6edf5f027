use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Local, SecondsFormat};

use crate::api::client::{MessagesRequest, Transport};
use crate::extract::document::extract_document;
use crate::extract::elements::{DetectedElement, extract_elements};
use crate::generate::error::GenError;
use crate::generate::prompt::{VISION_PROMPT, build_generation_prompt};
use crate::generate::request::{GenerationRequest, Screenshot};

// ============================================================================
// TestGenerator — the two API pipelines (vision analysis, test generation)
// ============================================================================

/// Runs the vision and generation pipelines over an injected transport.
/// Each pipeline is three stages: build request, send, extract from the
/// response text.
pub struct TestGenerator {
    transport: Box<dyn Transport>,
    model: String,
}

impl TestGenerator {
    pub fn new(transport: Box<dyn Transport>, model: &str) -> Self {
        Self {
            transport,
            model: model.to_string(),
        }
    }

    /// Build the vision request for one screenshot.
    pub fn build_vision_request(&self, screenshot: &Screenshot) -> Result<MessagesRequest, GenError> {
        if screenshot.data.is_empty() {
            return Err(GenError::Precondition(format!(
                "screenshot '{}' is empty",
                screenshot.name
            )));
        }

        let encoded = BASE64.encode(&screenshot.data);
        Ok(MessagesRequest::vision(
            &self.model,
            screenshot.media_type(),
            encoded,
            VISION_PROMPT,
        ))
    }

    /// Analyze one screenshot and return the elements detected in it.
    ///
    /// A failed call returns the error without invoking the extractor; a
    /// successful call whose text contains no parseable array returns an
    /// empty vec.
    pub fn analyze_screenshot(
        &self,
        screenshot: &Screenshot,
    ) -> Result<Vec<DetectedElement>, GenError> {
        let request = self.build_vision_request(screenshot)?;
        let response = self.transport.send(&request)?;
        Ok(extract_elements(response.text()))
    }

    /// Generate a Provar test case and return the de-fenced, trimmed XML.
    pub fn generate_test(&self, request: &GenerationRequest) -> Result<String, GenError> {
        request.check()?;

        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        let prompt = build_generation_prompt(request, &timestamp);
        let api_request = MessagesRequest::text(&self.model, prompt);

        let response = self.transport.send(&api_request)?;
        Ok(extract_document(response.text()))
    }
}
