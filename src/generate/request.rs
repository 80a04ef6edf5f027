use crate::extract::elements::DetectedElement;
use crate::generate::error::GenError;

// ============================================================================
// GenerationRequest — one generation attempt's inputs
// ============================================================================

/// Inputs for a single test case generation call. Constructed once per
/// attempt and consumed by the prompt builder.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub test_name: String,
    pub url: Option<String>,
    pub description: String,
    pub dom_html: Option<String>,
    pub detected_elements: Vec<DetectedElement>,
}

impl GenerationRequest {
    /// Verify the required fields are present before any API call is made.
    pub fn check(&self) -> Result<(), GenError> {
        if self.test_name.trim().is_empty() {
            return Err(GenError::Precondition(
                "test name must not be empty".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(GenError::Precondition(
                "test description must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Screenshot — one uploaded image pending vision analysis
// ============================================================================

#[derive(Debug, Clone)]
pub struct Screenshot {
    pub name: String,
    pub data: Vec<u8>,
}

impl Screenshot {
    pub fn new(name: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            data,
        }
    }

    /// Media type inferred from the filename extension. PNG is recognized
    /// explicitly; everything else is treated as JPEG.
    pub fn media_type(&self) -> &'static str {
        let lower = self.name.to_lowercase();
        if lower.ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        }
    }
}
