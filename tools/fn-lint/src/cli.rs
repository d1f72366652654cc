use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fn-lint",
    version,
    about = "Check shell function files for a shebang, a help flag, and hyphenated names",
    after_help = "Folder precedence: --folder > fn-lint.toml `folders` > functions, bin.\n\nExamples:\n  fn-lint\n  fn-lint --root-dir ~/dotfiles --folder functions\n  fn-lint --json"
)]
pub struct Cli {
    /// Project root holding the folders to scan (default: nearest ancestor with fn-lint.toml or .git)
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Folder to scan, relative to the root. Repeat to scan several.
    #[arg(long = "folder", value_name = "NAME")]
    pub folders: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
