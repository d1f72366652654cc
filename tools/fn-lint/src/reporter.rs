use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde_json::{json, Value};

use crate::checks::CHECK_NAMES;
use crate::report::LintReport;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Function Conventions ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

/// Print one check's line, then its violations if any.
pub fn print_check(report: &LintReport, check: &str) {
    let violations: Vec<&str> = report
        .results_for(check)
        .filter(|r| !r.passed)
        .map(|r| r.message.as_str())
        .collect();

    if violations.is_empty() {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            check,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
        return;
    }

    println!(
        "{} {}: {}",
        "\u{2717}".if_supports_color(Stdout, |s| s.red()),
        check,
        format!("{} violation(s)", violations.len()).if_supports_color(Stdout, |s| s.red()),
    );
    println!();
    for v in violations {
        println!("  {}", v.if_supports_color(Stdout, |s| s.dimmed()));
    }
    println!();
}

/// Print the closing summary. Returns true if every check passed.
pub fn print_summary(report: &LintReport) -> bool {
    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if report.passed() {
        println!(
            "{}",
            format!(
                "\nAll {} file(s) passed {} check(s).\n",
                report.files_scanned,
                CHECK_NAMES.len()
            )
            .if_supports_color(Stdout, |s| s.green()),
        );
        true
    } else {
        println!(
            "{}",
            format!(
                "\n{}/{} file(s) failed with {} total violation(s).\n",
                report.failing_files(),
                report.files_scanned,
                report.failures().count(),
            )
            .if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}

/// Human-readable report on stdout. Returns true if every check passed.
pub fn print_report(report: &LintReport) -> bool {
    print_header();
    for check in CHECK_NAMES {
        print_check(report, check);
    }
    print_summary(report)
}

pub fn render_json(report: &LintReport) -> Value {
    json!({
        "results": report.results,
        "summary": {
            "files": report.files_scanned,
            "passingFiles": report.fully_passing_files(),
            "checks": report.results.len(),
            "failures": report.failures().count(),
            "passed": report.passed(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{candidate, run_checks};

    fn report(files: &[(&str, &str, &str)]) -> LintReport {
        LintReport {
            results: files
                .iter()
                .flat_map(|(folder, name, content)| run_checks(&candidate(folder, name, content)))
                .collect(),
            files_scanned: files.len(),
        }
    }

    #[test]
    fn clean_report_prints_pass() {
        assert!(print_report(&report(&[("functions", "ok", "#!/bin/sh\n-h\n")])));
    }

    #[test]
    fn dirty_report_prints_fail() {
        assert!(!print_report(&report(&[("functions", "old_script", "echo hi")])));
    }

    #[test]
    fn json_lists_every_result_and_summary() {
        let value = render_json(&report(&[
            ("functions", "list-items", "#!/bin/sh\n# -h for help\n"),
            ("functions", "old_script", "echo hi"),
        ]));

        assert_eq!(value["results"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["summary"]["files"], 2);
        assert_eq!(value["summary"]["passingFiles"], 1);
        assert_eq!(value["summary"]["failures"], 3);
        assert_eq!(value["summary"]["passed"], false);

        let first = &value["results"][0];
        assert_eq!(first["folder"], "functions");
        assert_eq!(first["file"], "list-items");
        assert!(first["check"].is_string());
    }
}
