pub mod error;
pub mod generator;
pub mod prompt;
pub mod request;
