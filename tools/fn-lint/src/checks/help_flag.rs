use crate::checks::CheckResult;
use crate::walker::CandidateFile;

pub const NAME: &str = "Help parameter";

/// True iff `-h` or `--help` appears anywhere in `content`.
///
/// Plain substring match: `foo-habit` counts as mentioning `-h`.
pub fn mentions_help_flag(content: &str) -> bool {
    content.contains("-h") || content.contains("--help")
}

pub fn check(candidate: &CandidateFile) -> CheckResult {
    let id = format!("{}/{}", candidate.folder, candidate.name);
    if mentions_help_flag(&candidate.content) {
        return CheckResult::new(candidate, NAME, true, format!("{id} has a help parameter."));
    }

    CheckResult::new(
        candidate,
        NAME,
        false,
        format!(
            "{id} is missing help parameter.\n\
             \x20   Rule: Every function must handle -h or --help.\n\
             \x20   Fix: Add a usage branch, e.g. [[ \"$1\" == \"-h\" || \"$1\" == \"--help\" ]] && usage."
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::candidate;

    #[test]
    fn accepts_either_flag() {
        assert!(mentions_help_flag("usage: foo -h"));
        assert!(mentions_help_flag("usage: foo --help"));
    }

    #[test]
    fn substring_match_is_loose() {
        assert!(mentions_help_flag("foo-habit"));
    }

    #[test]
    fn rejects_text_without_flag() {
        assert!(!mentions_help_flag("usage: foo"));
        assert!(!mentions_help_flag(""));
        assert!(!mentions_help_flag("help"));
        assert!(!mentions_help_flag("-H"));
    }

    #[test]
    fn failing_result_names_the_rule() {
        let result = check(&candidate("bin", "deploy", "#!/bin/sh\necho deploy\n"));
        assert!(!result.passed);
        assert!(result.message.contains("bin/deploy is missing help parameter."));
    }
}
