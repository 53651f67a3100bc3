use std::path::Path;

use teloxide::{net::Download, prelude::*, types::FileMeta};
use tokio::fs;

use crate::{error::Errors, files::local};

/// Downloads a Telegram file into `dir` as `<unique id>.<extension>`.
pub(crate) async fn download_file(
    bot: &Bot,
    file_meta: &FileMeta,
    extension: &str,
    dir: &Path,
) -> Result<std::path::PathBuf, Errors> {
    let filename = format!("{}.{}", file_meta.unique_id, extension);
    let file = bot.get_file(file_meta.id.clone()).await?;

    let path = local::download_path(dir, &filename).await?;
    let mut dest = fs::File::create(&path).await?;

    if let Err(err) = bot.download_file(&file.path, &mut dest).await {
        drop(dest);
        local::remove(&path).await;
        return Err(err.into());
    }

    Ok(path)
}
