use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use tictacmind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = Options::parse();

    // Responses go to stdout, so logs stay on stderr.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let mut server = Server::new(options, std::io::stdout())?;
    if let Err(e) = server.run(stdin.lock())
    {
        log::error!("fatal error: {}", e);
        return Err(e);
    }

    Ok(())
}
