use std::fs;
use std::path::Path;

use crate::api::client::{HttpTransport, Transport};
use crate::cli::config::ApiSettings;
use crate::generate::generator::TestGenerator;
use crate::generate::request::Screenshot;
use crate::report::console::format_validation_report;
use crate::session::session::{GenerationSession, SessionInput, artifact_filename};
use crate::validate::rules::validate_document;

// ============================================================================
// generate subcommand
// ============================================================================

/// Run a full generation session and write the .testcase artifact.
/// Returns whether the generated document passed validation.
pub fn cmd_generate(
    settings: &ApiSettings,
    name: &str,
    url: Option<&str>,
    description: Option<&str>,
    description_file: Option<&str>,
    dom_file: Option<&str>,
    screenshot_paths: &[String],
    output_dir: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let description = match (description, description_file) {
        (Some(d), _) => d.to_string(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err("provide --description or --description-file".into());
        }
    };

    let dom_html = match dom_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let screenshots = load_screenshots(screenshot_paths)?;

    let transport = build_transport(settings)?;
    let generator = TestGenerator::new(transport, &settings.model);
    let mut session = GenerationSession::new(generator);

    if verbose > 0 && !screenshots.is_empty() {
        eprintln!("Analyzing {} screenshot(s) with vision AI...", screenshots.len());
    }

    let input = SessionInput {
        test_name: name.to_string(),
        url: url.map(|u| u.to_string()),
        description,
        dom_html,
        screenshots,
    };

    let result = session.generate(&input)?.clone();

    if verbose > 0 {
        eprintln!(
            "Detected {} UI element(s) across screenshots",
            session.detected_elements().len()
        );
    }

    println!("{}", format_validation_report(&result.validation));

    let filename = artifact_filename(name);
    let output_path = Path::new(output_dir).join(&filename);
    fs::write(&output_path, &result.xml)?;
    println!("Wrote {}", output_path.display());

    Ok(result.validation.is_valid())
}

// ============================================================================
// analyze subcommand
// ============================================================================

/// Analyze screenshots and print the detected elements.
pub fn cmd_analyze(
    settings: &ApiSettings,
    screenshot_paths: &[String],
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let screenshots = load_screenshots(screenshot_paths)?;

    let transport = build_transport(settings)?;
    let generator = TestGenerator::new(transport, &settings.model);

    let mut total = 0;
    for screenshot in &screenshots {
        if verbose > 0 {
            eprintln!("Analyzing '{}'...", screenshot.name);
        }

        match generator.analyze_screenshot(screenshot) {
            Ok(elements) => {
                for element in &elements {
                    total += 1;
                    println!(
                        "Element {}: {}\n  type: {} | action: {}\n  id: {}\n  xpath: {}",
                        total,
                        element.label.as_deref().unwrap_or("N/A"),
                        element.element_type.as_deref().unwrap_or("N/A"),
                        element.action.as_deref().unwrap_or("N/A"),
                        element.id.as_deref().unwrap_or("N/A"),
                        element.xpath.as_deref().unwrap_or("N/A"),
                    );
                }
            }
            Err(e) => {
                eprintln!("Warning: analysis failed for '{}': {}", screenshot.name, e);
            }
        }
    }

    println!("\nFound {} UI element(s)", total);
    Ok(())
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Validate an existing test case file. Returns whether it passed.
pub fn cmd_validate(file: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file)?;
    let report = validate_document(content.trim());
    println!("{}", format_validation_report(&report));
    Ok(report.is_valid())
}

// ============================================================================
// Helpers
// ============================================================================

fn build_transport(settings: &ApiSettings) -> Result<Box<dyn Transport>, Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(&settings.endpoint, settings.api_key.as_deref())?;
    Ok(Box::new(transport))
}

fn load_screenshots(paths: &[String]) -> Result<Vec<Screenshot>, Box<dyn std::error::Error>> {
    let mut screenshots = Vec::with_capacity(paths.len());
    for path in paths {
        let data = fs::read(path)?;
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();
        screenshots.push(Screenshot { name, data });
    }
    Ok(screenshots)
}
