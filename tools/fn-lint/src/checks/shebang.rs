use crate::checks::CheckResult;
use crate::walker::CandidateFile;

pub const NAME: &str = "Shebang line";

/// True iff `content` starts with `#!`. Leading whitespace does not count.
pub fn has_shebang(content: &str) -> bool {
    content.starts_with("#!")
}

pub fn check(candidate: &CandidateFile) -> CheckResult {
    let id = format!("{}/{}", candidate.folder, candidate.name);
    if has_shebang(&candidate.content) {
        return CheckResult::new(candidate, NAME, true, format!("{id} has a shebang line."));
    }

    CheckResult::new(
        candidate,
        NAME,
        false,
        format!(
            "{id} is missing a shebang line.\n\
             \x20   Rule: Every function file must start with an interpreter line such as #!/usr/bin/env bash.\n\
             \x20   Fix: Add the shebang as the very first line, with nothing before it."
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::candidate;

    #[test]
    fn accepts_interpreter_line() {
        assert!(has_shebang("#!/bin/bash\necho hi"));
        assert!(has_shebang("#!"));
    }

    #[test]
    fn rejects_missing_or_indented_shebang() {
        assert!(!has_shebang("echo hi"));
        assert!(!has_shebang(""));
        assert!(!has_shebang(" #!/bin/sh"));
        assert!(!has_shebang("\n#!/bin/sh"));
        assert!(!has_shebang("# !/bin/sh"));
    }

    #[test]
    fn failing_result_names_the_rule() {
        let result = check(&candidate("functions", "old_script", "echo hi"));
        assert!(!result.passed);
        assert_eq!(result.check, NAME);
        assert!(result.message.contains("functions/old_script is missing a shebang line."));
    }
}
