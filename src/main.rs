mod bot;
mod cli;
mod config;
mod display;
mod engines;
mod error;
mod files;
mod handlers;
mod models;
mod pipeline;
mod types;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    log::info!("Starting bot...");

    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = bot::run(config).await {
        log::error!("{}", err);
        std::process::exit(1);
    }

    log::info!("Bot stopped");
}
