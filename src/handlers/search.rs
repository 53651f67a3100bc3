use anyhow::Result;
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{FileMeta, InputFile, InputMedia, InputMediaPhoto};

use crate::config::Config;
use crate::engines::ReverseEngine;
use crate::files;
use crate::models::{MediaItem, Reply};
use crate::pipeline::{self, NOTHING_FOUND};

/// Longest caption Telegram accepts, in UTF-16 code units.
const CAPTION_LIMIT: usize = 1024;

fn caption_too_long(caption: &str) -> bool {
    caption.encode_utf16().count() > CAPTION_LIMIT
}

/// Downloads the file, looks it up and answers in `chat_id`.
///
/// The scratch file is removed whatever the search outcome.
pub(crate) async fn search(
    bot: &Bot,
    chat_id: ChatId,
    file: &FileMeta,
    extension: &str,
    config: &Config,
    engine: &dyn ReverseEngine,
) -> Result<()> {
    let path = files::download_file(bot, file, extension, &config.general.downloads_dir).await?;
    log::info!("File ID: {} downloaded to {}", file.id, path.display());

    let hits = engine.search(&path).await;
    files::local::remove(&path).await;
    let hits = hits?;

    let results = pipeline::process(&hits, config.saucenao.threshold);
    send_reply(bot, chat_id, pipeline::compose(results)).await?;

    log::info!("Reverse search done");

    Ok(())
}

pub(crate) async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    if let Reply::MediaGroup(items) = &reply
        && let Some(caption) = items.first().and_then(|item| item.caption.as_deref())
        && caption_too_long(caption)
    {
        log::warn!(
            "Caption for {} has {} UTF-16 units, Telegram accepts at most {}",
            chat_id,
            caption.encode_utf16().count(),
            CAPTION_LIMIT
        );
    }

    match reply {
        Reply::Empty => {
            log::info!("Send nothing found to: {}", chat_id);
            bot.send_message(chat_id, NOTHING_FOUND).await?;
        }
        // Telegram rejects media groups with a single item
        Reply::MediaGroup(mut items) if items.len() == 1 => {
            log::info!("Send single result to: {}", chat_id);
            let item = items.remove(0);
            let mut message = bot.send_photo(chat_id, input_file(&item.photo_url)?);

            if let Some(caption) = item.caption {
                message = message.caption(caption);
            }

            message.await?;
        }
        Reply::MediaGroup(items) => {
            log::info!("Send {} results to: {}", items.len(), chat_id);
            let media = items
                .into_iter()
                .map(input_media)
                .collect::<Result<Vec<_>>>()?;

            bot.send_media_group(chat_id, media).await?;
        }
    }

    Ok(())
}

fn input_file(url: &str) -> Result<InputFile> {
    Ok(InputFile::url(Url::parse(url)?))
}

fn input_media(item: MediaItem) -> Result<InputMedia> {
    let mut photo = InputMediaPhoto::new(input_file(&item.photo_url)?);

    if let Some(caption) = item.caption {
        photo = photo.caption(caption);
    }

    Ok(InputMedia::Photo(photo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_media_carries_caption() {
        let media = input_media(MediaItem {
            photo_url: "https://img3.saucenao.com/res/1.jpg".to_string(),
            caption: Some("80\nhttp://a".to_string()),
        })
        .unwrap();

        match media {
            InputMedia::Photo(photo) => {
                assert_eq!(photo.caption.as_deref(), Some("80\nhttp://a"));
            }
            _ => panic!("Unexpected media kind"),
        }
    }

    #[test]
    fn test_input_media_without_caption() {
        let media = input_media(MediaItem {
            photo_url: "https://img3.saucenao.com/res/2.jpg".to_string(),
            caption: None,
        })
        .unwrap();

        match media {
            InputMedia::Photo(photo) => assert!(photo.caption.is_none()),
            _ => panic!("Unexpected media kind"),
        }
    }

    #[test]
    fn test_caption_limit() {
        assert!(!caption_too_long(&"a".repeat(CAPTION_LIMIT)));
        assert!(caption_too_long(&"a".repeat(CAPTION_LIMIT + 1)));
        // Characters outside the BMP take two units
        assert!(caption_too_long(&"😀".repeat(CAPTION_LIMIT / 2 + 1)));
    }

    #[test]
    fn test_invalid_thumbnail_url() {
        assert!(input_file("not a url").is_err());
    }
}
