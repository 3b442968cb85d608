use std::path::{Path, PathBuf};

use async_walkdir::WalkDir;
use futures::StreamExt;
use globset::GlobSet;
use miette::{IntoDiagnostic, Result};

/// Walks the content directory for markdown documents.
pub struct ContentScanner {
    base_path: PathBuf,
    ignore: GlobSet,
}

impl ContentScanner {
    pub fn new(base_path: PathBuf, ignore: GlobSet) -> Self {
        Self { base_path, ignore }
    }

    /// Asynchronously collects the relative paths of all non-ignored
    /// markdown documents, sorted for deterministic output.
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn scan(&self) -> Result<Vec<String>> {
        let mut entries = WalkDir::new(&self.base_path);
        let mut pages = Vec::new();

        while let Some(res) = entries.next().await {
            match res {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry_path.is_file() || !is_markdown(&entry_path) {
                        continue;
                    }
                    let rel_path = entry_path
                        .strip_prefix(&self.base_path)
                        .into_diagnostic()?;

                    if !self.ignore.is_match(rel_path) {
                        pages.push(page_path(rel_path));
                    }
                }
                Err(e) => return Err(e).into_diagnostic(),
            }
        }
        pages.sort();

        Ok(pages)
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map(|e| e == "md").unwrap_or(false)
}

/// Page paths use forward slashes regardless of platform.
fn page_path(rel_path: &Path) -> String {
    rel_path.to_string_lossy().replace('\\', "/")
}
