use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedseed_runner::config::SeedConfig;
use tracing::info;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = SeedConfig::from_env()?;

    // Initialize logging
    schedseed_runner::init_tracing(config.log_level)?;

    let report = schedseed_runner::remove_comments(&config)?;
    info!(
        files = report.processed.len(),
        removed = report.removed_lines,
        "Comment stripping complete"
    );

    Ok(())
}
