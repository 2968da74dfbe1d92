pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod osint;
pub mod phone;
pub mod reporting;
pub mod utils;

// Re-export main types for easier access
pub use cli::{App, Args};
pub use crate::config::Config;
pub use phone::{
    PhoneTarget,
    PhoneMetadata,
    PhoneError,
    LineType
};
pub use engine::ScanWorkflow;
pub use error::{ReconError, ReconResult};
pub use osint::{InvestigationBundle, LookupCollector, LookupResult};
pub use reporting::{
    ReportManager,
    ReportFormat,
    ScanResults
};
