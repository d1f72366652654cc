use crate::checks::CheckResult;
use std::collections::BTreeMap;

/// Every check result of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub results: Vec<CheckResult>,
    pub files_scanned: usize,
}

/// Aggregate outcome for one (folder, file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub passed: usize,
    pub failed: Vec<&'static str>,
}

impl FileOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

impl LintReport {
    /// True iff no check failed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Results for one check, in scan order.
    pub fn results_for<'a>(&'a self, check: &'a str) -> impl Iterator<Item = &'a CheckResult> + 'a {
        self.results.iter().filter(move |r| r.check == check)
    }

    /// Outcomes keyed by (folder, file).
    pub fn file_outcomes(&self) -> BTreeMap<(&str, &str), FileOutcome> {
        let mut outcomes: BTreeMap<(&str, &str), FileOutcome> = BTreeMap::new();
        for r in &self.results {
            let entry = outcomes
                .entry((r.folder.as_str(), r.file.as_str()))
                .or_insert(FileOutcome { passed: 0, failed: Vec::new() });
            if r.passed {
                entry.passed += 1;
            } else {
                entry.failed.push(r.check);
            }
        }
        outcomes
    }

    pub fn fully_passing_files(&self) -> usize {
        self.file_outcomes().values().filter(|o| o.is_clean()).count()
    }

    pub fn failing_files(&self) -> usize {
        self.file_outcomes().values().filter(|o| !o.is_clean()).count()
    }
}
