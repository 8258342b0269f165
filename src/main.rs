use clap::Parser;
use dropfour::prelude::*;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = ServerOptions::parse();

    // Keep stdout for the protocol; logs go to stderr.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = Server::new(options).run()
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}
