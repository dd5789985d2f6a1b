//! Binary entrypoint for the terminal Hangman game.
use anyhow::Result;
use clap::Parser;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;

use yazikit::cli::HangmanArgs;
use yazikit::config::Config;
use yazikit::hangman::session::{self, EXIT_INTERRUPT};
use yazikit::hangman::words::WordList;
use yazikit::hangman::Game;
use yazikit::logutil::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = HangmanArgs::parse();

    let (config, load_error) = Config::load_or_default(&cli.config).await;
    init_logging(Some(&config.logging), cli.verbose);
    if let Some(e) = load_error {
        warn!("{} (using defaults)", e);
    }

    let words = WordList::from_config(config.hangman.words.as_deref());
    let word = match cli.seed {
        Some(seed) => {
            debug!("hangman: seeded word pick ({})", seed);
            words.pick(&mut StdRng::seed_from_u64(seed)).to_string()
        }
        None => words.pick(&mut rand::thread_rng()).to_string(),
    };
    let mut game = Game::new(&word);

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = session::play(&mut game, &mut stdin, &mut stdout) => {
            let end = result?;
            debug!("hangman: session ended {:?}", end);
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            println!("{}", EXIT_INTERRUPT);
            // The stdin read is parked on a blocking thread that runtime shutdown
            // would wait on; leave immediately instead.
            std::process::exit(0);
        }
    }
    Ok(())
}
