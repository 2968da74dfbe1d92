use tracing::{info, debug};

use crate::config::Config;
use crate::engine::ScanWorkflow;
use crate::error::ReconResult;
use crate::reporting::ReportManager;

use super::commands::Args;
use super::interactive;

/// The main application struct
pub struct App {
    args: Args,
    reports: ReportManager,
}

impl App {
    /// Create a new application instance
    pub fn new(args: Args) -> Self {
        Self {
            args,
            reports: ReportManager::new(),
        }
    }

    /// Run the application: authorization gate, configuration, scan, report
    pub async fn run(&self) -> ReconResult<()> {
        info!("Starting phonerecon v{}", env!("CARGO_PKG_VERSION"));

        interactive::print_banner();
        interactive::confirm_authorization()?;

        let config = self.resolve_config()?;
        let workflow = ScanWorkflow::new(config)?;
        self.execute(&workflow).await?;

        Ok(())
    }

    /// Load the layered configuration, apply CLI overrides and optionally
    /// persist the result.
    pub fn resolve_config(&self) -> ReconResult<Config> {
        let config = Config::load(self.args.config.as_deref())?
            .with_overrides(self.args.api_key.clone(), self.args.home_code.clone());
        debug!("Home calling code: {}", config.patterns.home_calling_code);

        if let Some(path) = &self.args.save_config {
            config.save(path)?;
            println!("[+] Configuration saved to: {}", path.display());
        }

        Ok(config)
    }

    /// Scan, print the report and optionally save it. Returns the rendered report.
    pub async fn execute(&self, workflow: &ScanWorkflow) -> ReconResult<String> {
        println!("[*] Starting enhanced scan for: {}", self.args.phone);
        if let Some(email) = &self.args.email {
            println!("[*] Additional email target: {}", email);
        }

        let results = workflow.run(&self.args.phone, self.args.email.as_deref()).await?;
        let report = self.reports.render(&results, self.args.report_format())?;

        println!("{}", report);

        if let Some(path) = &self.args.output {
            self.reports.write(&report, path).await?;
            println!("[+] Detailed report saved to: {}", path.display());
        }

        Ok(report)
    }
}
