use std::{error::Error, sync::Arc};

use crate::{
    config::Config,
    engines::{SauceNao, SharedEngine},
    handlers,
};
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub fn handler_tree() -> UpdateHandler<Box<dyn Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(handlers::command::branch())
        .branch(handlers::media::branch())
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let bot = Bot::new(config.telegram.token.clone());
    let engine: SharedEngine = Arc::new(SauceNao::new(&config.saucenao)?);
    let config = Arc::new(config);

    log::info!("Dispatcher configured, starting dispatch...");

    Dispatcher::builder(bot, handler_tree())
        .dependencies(dptree::deps![config, engine])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
