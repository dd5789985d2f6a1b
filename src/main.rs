//! Binary entrypoint for `yazi-bulk-rename`.
//!
//! Prints one episode filename per line in Yazi bulk-rename order:
//!
//! ```text
//! $ yazi-bulk-rename -s 1 -e 12 -t mkv
//! 01.mkv
//! 10.mkv
//! 11.mkv
//! 12.mkv
//! 02.mkv
//! ...
//! ```
//!
//! Flags fall back to `[rename]` in the config file, then to `1`, `10` and `mp4`.
use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

use yazikit::cli::RenameArgs;
use yazikit::config::Config;
use yazikit::episodes::render_episode_names;
use yazikit::logutil::{escape_log, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = RenameArgs::parse();

    if cli.init_config {
        init_logging(None, cli.verbose);
        Config::create_default(&cli.config).await?;
        info!("Configuration file created at {}", cli.config);
        return Ok(());
    }

    let (config, load_error) = Config::load_or_default(&cli.config).await;
    init_logging(Some(&config.logging), cli.verbose);
    if let Some(e) = load_error {
        warn!("{} (using defaults)", e);
    }

    let job = cli.resolve(&config.rename);
    debug!(
        "rename: start={} end={} extension='{}'",
        job.start,
        job.end,
        escape_log(&job.extension)
    );
    if job.start > job.end {
        info!("rename: empty range {}..={}", job.start, job.end);
    }

    println!("{}", render_episode_names(job.start, job.end, &job.extension));
    Ok(())
}
