use crate::extract::elements::DetectedElement;
use crate::generate::error::GenError;
use crate::generate::generator::TestGenerator;
use crate::generate::request::{GenerationRequest, Screenshot};
use crate::validate::finding::ValidationReport;
use crate::validate::rules::validate_document;

// ============================================================================
// GenerationSession — orchestrates vision → generation → validation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Analyzing,
    Generating,
    Validated,
    Failed,
}

/// A generated document and the validation computed from that exact snapshot.
/// The two are only ever replaced together.
#[derive(Debug, Clone)]
pub struct GeneratedTest {
    pub xml: String,
    pub validation: ValidationReport,
}

/// Collaborator-supplied inputs for one generation attempt.
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub test_name: String,
    pub url: Option<String>,
    pub description: String,
    pub dom_html: Option<String>,
    pub screenshots: Vec<Screenshot>,
}

/// One user session. Owns the accumulated detected elements and the last
/// successful result; neither is shared across sessions.
pub struct GenerationSession {
    generator: TestGenerator,
    state: SessionState,
    detected_elements: Vec<DetectedElement>,
    last_test: Option<GeneratedTest>,
}

impl GenerationSession {
    pub fn new(generator: TestGenerator) -> Self {
        Self {
            generator,
            state: SessionState::Idle,
            detected_elements: Vec::new(),
            last_test: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Elements accumulated across all vision calls this session, in
    /// image-then-within-image order.
    pub fn detected_elements(&self) -> &[DetectedElement] {
        &self.detected_elements
    }

    /// Last successfully generated test, if any. Survives failed attempts.
    pub fn last_test(&self) -> Option<&GeneratedTest> {
        self.last_test.as_ref()
    }

    /// Run the full pipeline: optional vision pass, one generation call,
    /// validation of the result.
    ///
    /// Screenshots are only analyzed while no elements have been accumulated
    /// yet; once a batch has produced elements, later calls reuse them until
    /// `reset()`. A single screenshot's failure is reported on stderr and
    /// does not abort the remaining screenshots.
    ///
    /// On generation failure the previous result is left untouched.
    pub fn generate(&mut self, input: &SessionInput) -> Result<&GeneratedTest, GenError> {
        if input.test_name.trim().is_empty() || input.description.trim().is_empty() {
            self.state = SessionState::Idle;
            return Err(GenError::Precondition(
                "test name and description are required".to_string(),
            ));
        }

        if !input.screenshots.is_empty() && self.detected_elements.is_empty() {
            self.state = SessionState::Analyzing;
            for screenshot in &input.screenshots {
                match self.generator.analyze_screenshot(screenshot) {
                    Ok(elements) => self.detected_elements.extend(elements),
                    Err(e) => {
                        eprintln!(
                            "Warning: screenshot analysis failed for '{}': {}",
                            screenshot.name, e
                        );
                    }
                }
            }
        }

        self.state = SessionState::Generating;
        let request = GenerationRequest {
            test_name: input.test_name.clone(),
            url: input.url.clone(),
            description: input.description.clone(),
            dom_html: input.dom_html.clone(),
            detected_elements: self.detected_elements.clone(),
        };

        match self.generator.generate_test(&request) {
            Ok(xml) => {
                let validation = validate_document(&xml);
                self.state = SessionState::Validated;
                Ok(self.last_test.insert(GeneratedTest { xml, validation }))
            }
            Err(e) => {
                self.state = SessionState::Failed;
                Err(e)
            }
        }
    }

    /// Clear all per-session state: accumulated elements, last result, state.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.detected_elements.clear();
        self.last_test = None;
    }
}

// ============================================================================
// Artifact naming
// ============================================================================

/// Filename for the downloadable artifact: spaces become underscores, with
/// the Provar `.testcase` extension. Served as `text/xml`.
pub fn artifact_filename(test_name: &str) -> String {
    format!("{}.testcase", test_name.replace(' ', "_"))
}

pub const ARTIFACT_MIME_TYPE: &str = "text/xml";
