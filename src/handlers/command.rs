use std::sync::Arc;

use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{config::Config, engines::SharedEngine, handlers::media, types::HandlerResult};

pub(crate) const GREETING: &str =
    "Hello! Send me a picture or an image file and I will look up where it comes from.";
pub(crate) const REPLY_HINT: &str = "Please reply to a message to search for its content.";
pub(crate) const NO_IMAGE_HINT: &str = "Please reply to a message that contains an image.";

#[derive(BotCommands, Clone, Debug)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported"
)]
enum Command {
    #[command()]
    Start,
    #[command(description = "Show a help text")]
    Help,
    #[command(description = "Search for the image of the replied message")]
    Search,
}

async fn handle_search_message(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    engine: SharedEngine,
) -> HandlerResult<()> {
    let chat_id = msg.chat.id;

    if let Some(reply_to_msg) = msg.reply_to_message() {
        if media::filter_for_media_message(reply_to_msg.clone()) {
            media::handle_media_message(bot, reply_to_msg.clone(), config, engine).await?
        } else {
            bot.send_message(chat_id, NO_IMAGE_HINT).await?;
        }
    } else {
        bot.send_message(chat_id, REPLY_HINT).await?;
    }

    Ok(())
}

async fn command_dispatcher(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
    engine: SharedEngine,
) -> HandlerResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, GREETING).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Search => handle_search_message(bot, msg, config, engine).await?,
    };

    Ok(())
}

pub(crate) fn branch() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(command_dispatcher)
}
