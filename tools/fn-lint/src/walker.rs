use crate::error::LintError;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file under test, loaded at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub folder: String,
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// A file is checked iff its name has no `.` and does not start with `_`.
pub fn is_candidate(name: &str) -> bool {
    !name.contains('.') && !name.starts_with('_')
}

/// Lazily enumerate candidates directly inside each folder under `base`.
///
/// Folders are visited in the order given; entries within a folder come in
/// directory-listing order. Every call re-scans the filesystem.
pub fn candidates<S: AsRef<str>>(base: &Path, folders: &[S]) -> Candidates {
    Candidates {
        base: base.to_path_buf(),
        pending: folders.iter().map(|f| f.as_ref().to_string()).rev().collect(),
        current: None,
    }
}

pub struct Candidates {
    base: PathBuf,
    // Reversed so the next folder is popped from the end.
    pending: Vec<String>,
    current: Option<(String, ReadDir)>,
}

impl Candidates {
    fn open_next_folder(&mut self) -> Option<Result<(), LintError>> {
        let folder = self.pending.pop()?;
        let path = self.base.join(&folder);
        debug!(folder = %folder, path = %path.display(), "scanning folder");
        match fs::read_dir(&path) {
            Ok(entries) => {
                self.current = Some((folder, entries));
                Some(Ok(()))
            }
            Err(source) => Some(Err(LintError::Discovery { folder, path, source })),
        }
    }
}

impl Iterator for Candidates {
    type Item = Result<CandidateFile, LintError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (folder, entries) = match &mut self.current {
                Some((folder, entries)) => (folder, entries),
                None => {
                    if let Err(e) = self.open_next_folder()? {
                        return Some(Err(e));
                    }
                    continue;
                }
            };

            let Some(entry) = entries.next() else {
                self.current = None;
                continue;
            };

            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(LintError::Discovery {
                        folder: folder.clone(),
                        path: self.base.join(folder.as_str()),
                        source,
                    }))
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            if !is_candidate(&name) {
                continue;
            }

            // Follows symlinks; a dangling link surfaces as a read error.
            match fs::metadata(&path) {
                Ok(meta) if !meta.is_file() => continue,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(LintError::Read {
                        folder: folder.clone(),
                        file: name,
                        source,
                    }))
                }
            }

            debug!(folder = %folder, file = %name, "reading candidate");
            return Some(match fs::read_to_string(&path) {
                Ok(content) => Ok(CandidateFile {
                    folder: folder.clone(),
                    name,
                    path,
                    content,
                }),
                Err(source) => Err(LintError::Read {
                    folder: folder.clone(),
                    file: name,
                    source,
                }),
            });
        }
    }
}
