pub mod api;
pub mod cli;
pub mod extract;
pub mod generate;
pub mod report;
pub mod session;
pub mod validate;

pub use api::client::{MessagesRequest, MessagesResponse, Transport};
pub use extract::document::extract_document;
pub use extract::elements::{DetectedElement, extract_elements};
pub use generate::error::GenError;
pub use generate::generator::TestGenerator;
pub use generate::request::{GenerationRequest, Screenshot};
pub use session::session::{GeneratedTest, GenerationSession, SessionInput, SessionState};
pub use validate::finding::{Finding, Severity, ValidationReport};
pub use validate::rules::validate_document;
