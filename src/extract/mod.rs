pub mod document;
pub mod elements;
