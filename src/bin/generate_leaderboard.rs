use std::process::ExitCode;

use reels_leaderboard::{AirtableClient, Config, Generator};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(entries) => {
            info!(entries, "leaderboard snapshot published");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "leaderboard generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> reels_leaderboard::Result<usize> {
    let config = Config::from_env()?;
    let client = AirtableClient::with_timeout(config.airtable, config.http_timeout)?;
    let snapshot = Generator::new(client, config.generator).generate().await?;
    Ok(snapshot.len())
}
