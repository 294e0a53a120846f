//! Binary entrypoint for the Zuul CLI.
//!
//! Commands:
//! - `play [--script <file>]` - play interactively, or replay commands from a file (default)
//! - `init` - create a starter `config.toml`
//! - `check-world [--seed <file>]` - build the world and report its layout
//!
//! See the library crate docs for module-level details: `zuul::`.
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use zuul::config::Config;
use zuul::engine::{Game, FAREWELL};
use zuul::world::{campus_world, load_world_from_json, World};

#[derive(Parser)]
#[command(name = "zuul")]
#[command(about = "World of Zuul: a small text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play {
        /// Read commands from this file instead of stdin
        #[arg(short, long)]
        script: Option<String>,

        /// World seed JSON (overrides the config file)
        #[arg(long)]
        seed: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Build the world and print a connectivity report
    CheckWorld {
        /// World seed JSON (overrides the config file)
        #[arg(long)]
        seed: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        script: None,
        seed: None,
    });

    match command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            if std::path::Path::new(&cli.config).exists() {
                bail!("{} already exists; refusing to overwrite", cli.config);
            }
            Config::create_default(&cli.config).await?;
            println!("Wrote default configuration to {}", cli.config);
            Ok(())
        }
        Commands::Play { script, seed } => {
            let config = load_config(&cli.config, cli.verbose).await;
            let world = build_world(&config, seed.as_deref())?;
            let mut game = Game::new(world).with_name(&config.game.name);
            info!("Starting {} v{}", config.game.name, env!("CARGO_PKG_VERSION"));

            match script {
                Some(path) => {
                    let file = tokio::fs::File::open(&path).await?;
                    run_loop(&mut game, BufReader::new(file), true).await
                }
                None => {
                    let stdin = BufReader::new(tokio::io::stdin());
                    run_loop(&mut game, stdin, config.game.echo_commands).await
                }
            }
        }
        Commands::CheckWorld { seed } => {
            let config = load_config(&cli.config, cli.verbose).await;
            let world = build_world(&config, seed.as_deref())?;
            println!("Locations: {}", world.len());
            println!("Start: {}", world.id_of(world.start()));
            let unreachable = world.unreachable_from_start();
            if unreachable.is_empty() {
                println!("All locations reachable from the start.");
            } else {
                println!("Unreachable: {}", unreachable.join(", "));
            }
            Ok(())
        }
    }
}

/// Load the config and start logging. A missing or broken file falls back to
/// defaults with a warning.
async fn load_config(path: &str, verbose: u8) -> Config {
    let loaded = Config::load(path).await;
    init_logging(&loaded.as_ref().ok().cloned(), verbose);
    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("{} (using defaults)", e);
            Config::default()
        }
    }
}

/// Pick the world: CLI seed, then configured seed, then the built-in campus.
fn build_world(config: &Config, seed_override: Option<&str>) -> Result<World> {
    let world = match seed_override.or(config.game.world_seed.as_deref()) {
        Some(path) => load_world_from_json(path)?,
        None => campus_world()?,
    };
    Ok(world)
}

/// One turn per input line until a bare `quit` or end of input.
async fn run_loop<R>(game: &mut Game, reader: R, echo: bool) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("{}", game.welcome());
    let mut lines = reader.lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            println!("{}", FAREWELL);
            return Ok(());
        };
        if echo {
            println!("{}", line);
        }
        let reply = game.process_line(&line);
        println!("{}", reply.text);
        if reply.finished {
            return Ok(());
        }
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    let log_file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    let opened = log_file.and_then(|file| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .ok()
    });

    if let Some(f) = opened {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // On a terminal, mirror records to stderr as well as the file
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
