use crate::error::{Error, WriteError};
use std::path::{Path, PathBuf};
use tokio::fs;

pub(crate) async fn fetch(url: &str) -> Result<Vec<u8>, Error> {
    tracing::debug!("requesting {}", url);

    let body = reqwest::get(url).await?.bytes().await?;

    tracing::debug!("received {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}

/// Writes `contents` to a sibling temporary file and renames it over `path`,
/// so readers never observe a half-written file.
pub(crate) async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    let tmp_path = tmp_path(path);
    tracing::debug!("staging {} bytes in {}", contents.len(), tmp_path.display());

    let staged = match fs::write(&tmp_path, contents).await {
        Ok(()) => fs::rename(&tmp_path, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = staged {
        if fs::remove_file(&tmp_path).await.is_ok() {
            tracing::debug!("removed {}", tmp_path.display());
        }
        return Err(e.into());
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
