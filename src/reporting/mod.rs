mod format;
mod generator;
pub mod formats;
pub mod model;

pub use generator::ReportManager;
pub use model::{NamedMap, ScanResults, ScanTarget};
pub use formats::{ReportFormat, ReportGenerator, extension_to_format};
