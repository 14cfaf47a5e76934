//! Binary entrypoint for the campusquest CLI.
//!
//! Commands:
//! - `play [--world <path>]` - play on stdin/stdout (the default)
//! - `init` - write a starter `config.toml`
//! - `check [--world <path>]` - validate a world and report reachability
//! - `export-world <path>` - write the built-in world as a JSON seed
use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use campusquest::config::Config;
use campusquest::game::seed::{canonical_items, canonical_rooms};
use campusquest::game::{
    load_world_from_json, save_world_to_json, Game, GameEnd, GameState, LineSource, World,
    WriterPresenter,
};

#[derive(Parser)]
#[command(name = "campusquest")]
#[command(about = "Collect every item and bring it back to Reception")]
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
    /// Play the game
    Play {
        /// JSON world seed (overrides game.world_file)
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Validate a world and report what is reachable from the start room
    Check {
        /// JSON world seed (overrides game.world_file)
        #[arg(short, long)]
        world: Option<String>,
    },
    /// Write the built-in world as a JSON seed file
    ExportWorld {
        /// Destination path
        path: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let command = cli.command.unwrap_or(Commands::Play { world: None });

    // Init writes the config, so there is nothing to load yet
    let loaded = match command {
        Commands::Init => None,
        _ => Config::load_if_present(&cli.config)?,
    };
    let missing = loaded.is_none() && !matches!(command, Commands::Init);
    let config = loaded.unwrap_or_default();
    init_logging(&config, cli.verbose);
    if missing {
        warn!("Config file {} not found, using defaults", cli.config);
    }

    match command {
        Commands::Init => {
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::Play { world } => {
            let world = load_world(&config, world.as_deref())?;
            let state = GameState::new(&world, config.capacity()?)?;
            let mut game = Game::new(state).with_mass_line(config.game.show_mass);

            let stdin = io::stdin();
            let mut source = LineSource::new(stdin.lock(), io::stdout());
            let mut presenter = WriterPresenter::new(io::stdout());
            match game.run(&mut source, &mut presenter)? {
                GameEnd::Won => info!("Player won"),
                GameEnd::InputClosed => info!("Player left without winning"),
            }
        }
        Commands::Check { world } => {
            let world = load_world(&config, world.as_deref())?;
            let capacity = config.capacity()?;
            let graph = world.graph();
            let reachable = graph.reachable_from(world.start_room().as_str());
            println!(
                "World OK: {} rooms, {} items ({}), start room {}",
                graph.len(),
                world.catalog().len(),
                world.total_item_mass(),
                world.start_room()
            );
            println!(
                "Reachable from start: {}/{} rooms",
                reachable.len(),
                graph.len()
            );
            for room in graph.rooms().filter(|r| !reachable.contains(&r.id)) {
                println!("  unreachable: {}", room.id);
            }
            if world.total_item_mass() > capacity {
                println!(
                    "Warning: items weigh more than the {} capacity; the game cannot be won",
                    capacity
                );
            }
        }
        Commands::ExportWorld { path } => {
            let world = World::new(canonical_rooms(), canonical_items(), &config.game.start_room)?;
            save_world_to_json(&world, &path)?;
            println!("Wrote {}", path);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_world(config: &Config, cli_world: Option<&str>) -> Result<World> {
    match cli_world.or(config.game.world_file.as_deref()) {
        Some(path) => {
            load_world_from_json(path).with_context(|| format!("loading world from {}", path))
        }
        None => World::new(canonical_rooms(), canonical_items(), &config.game.start_room)
            .context("building the built-in world"),
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.target(env_logger::Target::Stderr);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    if let Some(f) = file {
        let file = std::sync::Mutex::new(f);
        // Echo to the terminal only when someone is watching; otherwise the
        // file gets everything and stderr stays clean.
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
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
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}
