use std::path::{Path, PathBuf};

use tokio::fs;

pub(crate) async fn download_path(dir: &Path, filename: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    Ok(dir.join(filename))
}

/// Removes a scratch file. Failing to do so never fails the search.
pub(crate) async fn remove(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => log::debug!("Removed {}", path.display()),
        Err(err) => log::warn!("Failed to remove {}: {}", path.display(), err),
    }
}
