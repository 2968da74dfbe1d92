pub mod json;
pub mod text;

pub use super::format::{ReportFormat, ReportGenerator, extension_to_format};
