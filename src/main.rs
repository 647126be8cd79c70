use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use update_check::check::checker::VersionChecker;
use update_check::check::fetcher::HttpReleaseFetcher;
use update_check::config::CheckConfig;

#[derive(Parser)]
#[command(name = "update-check")]
#[command(version, about = "TTL-cached update check for command line tools")]
struct Cli {
    /// Disable the update check entirely
    #[arg(long)]
    no_update_check: bool,

    /// Override the cache file location
    #[arg(long)]
    cache_path: Option<PathBuf>,

    /// Override the cache time-to-live, in seconds
    #[arg(long)]
    cache_ttl_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Advisories and diagnostics go to stderr; stdout stays free for
    // whatever the host pipeline does with it.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let mut config = CheckConfig::new("update-check", env!("CARGO_PKG_VERSION"))
        .enabled(!cli.no_update_check);
    if let Some(path) = cli.cache_path {
        config = config.cache_path(path);
    }
    if let Some(secs) = cli.cache_ttl_secs {
        config = config.cache_ttl(Duration::from_secs(secs));
    }

    let checker = VersionChecker::new(config, HttpReleaseFetcher::default());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(checker.check_for_new_version());

    Ok(())
}
