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

    let appended = schedseed_runner::generate_schedule(&config)?;
    info!(
        rows = appended,
        path = %config.fixture_file.display(),
        "Schedule seed complete"
    );

    if config.strip_comments {
        schedseed_runner::remove_comments(&config)?;
    }

    Ok(())
}
