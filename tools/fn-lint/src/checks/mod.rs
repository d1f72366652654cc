pub mod filename_hyphens;
pub mod help_flag;
pub mod shebang;

use crate::walker::CandidateFile;
use serde::Serialize;

/// Outcome of one check against one candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub folder: String,
    pub file: String,
    pub check: &'static str,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    fn new(candidate: &CandidateFile, check: &'static str, passed: bool, message: String) -> Self {
        Self {
            folder: candidate.folder.clone(),
            file: candidate.name.clone(),
            check,
            passed,
            message,
        }
    }
}

pub type CheckFn = fn(&CandidateFile) -> CheckResult;

/// Every convention check, in reporting order.
pub const ALL_CHECKS: &[CheckFn] = &[shebang::check, help_flag::check, filename_hyphens::check];

/// Names of [`ALL_CHECKS`], in the same order.
pub const CHECK_NAMES: &[&str] = &[shebang::NAME, help_flag::NAME, filename_hyphens::NAME];

/// Run every check against one candidate. No check short-circuits another.
pub fn run_checks(candidate: &CandidateFile) -> Vec<CheckResult> {
    ALL_CHECKS.iter().map(|check_fn| check_fn(candidate)).collect()
}

#[cfg(test)]
pub(crate) fn candidate(folder: &str, name: &str, content: &str) -> CandidateFile {
    CandidateFile {
        folder: folder.to_string(),
        name: name.to_string(),
        path: std::path::PathBuf::from(folder).join(name),
        content: content.to_string(),
    }
}
