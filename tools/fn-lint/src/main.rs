use std::process;

use clap::Parser;
use fn_lint::cli::Cli;
use fn_lint::config::LinterConfig;
use fn_lint::error::LintError;
use fn_lint::{logging, reporter};

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    });

    let code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("Error: {err}");
            2
        }
    };
    process::exit(code);
}

fn run(cli: &Cli) -> Result<bool, LintError> {
    let mut config = match &cli.root_dir {
        Some(dir) => LinterConfig::load(dir)?,
        None => LinterConfig::discover()?,
    };
    if !cli.folders.is_empty() {
        config = config.with_folders(cli.folders.iter().cloned());
    }
    tracing::debug!(root = %config.root_dir.display(), folders = ?config.folders, "resolved config");

    let report = fn_lint::run_all_checks(&config)?;

    if cli.json {
        println!("{:#}", reporter::render_json(&report));
        Ok(report.passed())
    } else {
        Ok(reporter::print_report(&report))
    }
}
