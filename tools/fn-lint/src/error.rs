use std::io;
use std::path::PathBuf;

/// Fatal errors that abort a lint run.
///
/// A failing convention check is not an error: it is recorded as a failing
/// [`CheckResult`](crate::checks::CheckResult) and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("cannot list folder `{folder}` ({}): {source}", .path.display())]
    Discovery {
        folder: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {folder}/{file} as text: {source}")]
    Read {
        folder: String,
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("could not find project root (no fn-lint.toml or .git above {}); pass --root-dir", .start.display())]
    RootNotFound { start: PathBuf },
}

