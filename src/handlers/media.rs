use std::error::Error;
use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::FileMeta;

use crate::config::Config;
use crate::engines::SharedEngine;
use crate::handlers::search;
use crate::types::HandlerResult;

pub(crate) const FAILURE_NOTICE: &str =
    "Oh no, something went wrong while searching for the image.";

/// The image attached to `msg` and the extension it is stored with.
///
/// Photos come in several sizes, the last one is the largest. Documents only
/// count when their MIME type is `image/*`.
fn image_file(msg: &Message) -> Option<(&FileMeta, String)> {
    if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
        return Some((&photo.file, "jpg".to_string()));
    }

    let document = msg.document()?;
    let mime = document.mime_type.as_ref()?;
    if mime.type_() == mime::IMAGE {
        Some((&document.file, mime.subtype().as_str().to_string()))
    } else {
        None
    }
}

pub(crate) fn filter_for_media_message(msg: Message) -> bool {
    image_file(&msg).is_some()
}

pub(crate) async fn handle_media_message(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    engine: SharedEngine,
) -> HandlerResult<()> {
    let chat_id = msg.chat.id;

    let Some((file, extension)) = image_file(&msg) else {
        log::warn!("handle_media_message called with unexpected message");
        return Ok(());
    };

    log::info!("Received image {} in chat {}", file.id, chat_id);

    if let Err(err) = search::search(
        &bot,
        chat_id,
        file,
        &extension,
        &config,
        engine.as_ref(),
    )
    .await
    {
        log::error!("Search for file ID {} failed: {}", file.id, err);
        bot.send_message(chat_id, FAILURE_NOTICE).await?;
    }

    Ok(())
}

pub fn branch() -> UpdateHandler<Box<dyn Error + Send + Sync + 'static>> {
    Update::filter_message()
        .filter(filter_for_media_message)
        .endpoint(handle_media_message)
}
