//! Infrastructure layer for Counsel: configuration files and document
//! extraction.

pub mod config_service;
pub mod paths;
pub mod resume_extractor;

pub use config_service::ConfigService;
pub use paths::CounselPaths;
pub use resume_extractor::{extract_pdf_file, extract_pdf_text};
