pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod reporter;
pub mod walker;

use config::LinterConfig;
use error::LintError;
use report::LintReport;
use tracing::{debug, info};

/// Scan every configured folder and run all checks against every candidate.
///
/// Check failures are collected into the report; only discovery and read
/// failures abort the run.
pub fn run_all_checks(config: &LinterConfig) -> Result<LintReport, LintError> {
    let mut report = LintReport::default();

    for candidate in walker::candidates(&config.root_dir, &config.folders) {
        let candidate = candidate?;
        let results = checks::run_checks(&candidate);
        debug!(
            folder = %candidate.folder,
            file = %candidate.name,
            failed = results.iter().filter(|r| !r.passed).count(),
            "checked"
        );
        report.results.extend(results);
        report.files_scanned += 1;
    }

    info!(
        files = report.files_scanned,
        failures = report.failures().count(),
        "lint run finished"
    );
    Ok(report)
}
