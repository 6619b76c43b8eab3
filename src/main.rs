use tracing_subscriber::EnvFilter;

mod game;
mod host;
mod shared;

use host::HostSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let settings = HostSettings::from_env();
  tracing::info!(?settings, "starting headless arena");

  let summary = host::run(settings).await?;
  tracing::info!(ticks = summary.ticks, rounds = summary.rounds_played, "arena stopped");
  Ok(())
}
