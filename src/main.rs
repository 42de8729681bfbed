use std::io::{self, BufReader};

use anyhow::Context;
use tokio::signal;
use tracing::info;

use paint_collection::config::load_config;
use paint_collection::console::{spawn_line_reader, Console};
use paint_collection::logging::init_logging;
use paint_collection::session::Session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load config.toml")?;
    init_logging(config.log_filter());

    info!(save_path = config.save_path(), "starting paint collection");
    let session = Session::new(config.save_path());
    let input = spawn_line_reader(BufReader::new(io::stdin()))
        .context("failed to start console input thread")?;
    let mut console = Console::new(input, tokio::io::stdout(), session, config.prompt());

    console.start(signal::ctrl_c()).await.context("console failed")?;

    Ok(())
}
