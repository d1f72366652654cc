use crate::checks::CheckResult;
use crate::walker::CandidateFile;

pub const NAME: &str = "Filename hyphens";

/// True iff `name` has no underscore. A hyphen is not required.
pub fn is_hyphenated(name: &str) -> bool {
    !name.contains('_')
}

pub fn check(candidate: &CandidateFile) -> CheckResult {
    let id = format!("{}/{}", candidate.folder, candidate.name);
    if is_hyphenated(&candidate.name) {
        return CheckResult::new(candidate, NAME, true, format!("{id} uses no underscores."));
    }

    CheckResult::new(
        candidate,
        NAME,
        false,
        format!(
            "{id} contains underscore(s) instead of hyphen(s).\n\
             \x20   Rule: Function file names separate words with hyphens.\n\
             \x20   Fix: Rename the file to {}/{}.",
            candidate.folder,
            candidate.name.replace('_', "-"),
        ),
    )
}
