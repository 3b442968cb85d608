use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tokio::fs;

/// Writes a generated artifact, creating parent directories as needed.
#[tracing::instrument(name = "save file", level = "trace", skip(contents))]
pub async fn save_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await.into_diagnostic()?;
        }
    }

    fs::write(path, contents).await.into_diagnostic()?;

    Ok(())
}
