use clap::Parser;
use guess_the_word::GameError;
use guess_the_word::config::{Cli, Command};
use guess_the_word::screens;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError>
{
    let cli = Cli::parse();
    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }
    let config = cli.round_config()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let rounds = screens::run_session(&config)?;
            println!("Thanks for playing! Rounds finished: {rounds}");
        }
        Command::Words => {
            println!("Words ({}):", config.words().len());
            for word in config.words() {
                println!("  {word}");
            }
        }
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), GameError>
{
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
