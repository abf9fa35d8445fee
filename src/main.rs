//! Binary entrypoint for the advworld CLI.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `check` - load the configured world seed and report problems in the map
//! - `describe <zone>` - print what a player standing in a zone would see
//!
//! See the library crate docs for module-level details: `advworld::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::info;

use advworld::config::Config;
use advworld::world::{load_world_from_json, World};

#[derive(Parser)]
#[command(name = "advworld")]
#[command(about = "Inspect and validate text adventure worlds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Load the world seed and report unreachable zones and keyless locks
    Check,
    /// Show a zone the way a player would see it
    Describe {
        /// Zone name (case-insensitive)
        zone: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init runs before a config exists; everything else falls back to defaults
    // when the file is missing so a bare checkout still works.
    let config = match cli.command {
        Commands::Init => None,
        _ => match Config::load(&cli.config).await {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!("{}; using defaults", e);
                None
            }
        },
    };
    init_logging(&config, cli.verbose);
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Check => {
            let world = load_world_from_json(&config.world.seed_file)?;
            let problems = check_world(&world, &config.world.start_zone)?;
            println!("{} zones loaded from {}", world.len(), config.world.seed_file);
            if problems.is_empty() {
                println!("No problems found.");
            } else {
                for problem in &problems {
                    println!("- {}", problem);
                }
                return Err(anyhow!("{} problem(s) found", problems.len()));
            }
        }
        Commands::Describe { zone } => {
            let world = load_world_from_json(&config.world.seed_file)?;
            let found = world
                .zone_by_name(&zone)
                .ok_or_else(|| anyhow!("No zone named {}", zone))?;
            println!("{}", found.name());
            println!("{}", found.description());
            println!("{}", found.exit_string());
            for (label, listing) in [
                ("Objets", found.items_string()),
                ("Conteneurs", found.containers_string()),
                ("Personnages", found.npcs_string()),
                ("Énigmes", found.puzzles_string()),
            ] {
                if !listing.is_empty() {
                    println!("{}: {}", label, listing);
                }
            }
        }
    }

    Ok(())
}

/// Human-readable findings about a loaded world.
fn check_world(world: &World, start_zone: &str) -> Result<Vec<String>> {
    let start = world
        .find(start_zone)
        .ok_or_else(|| anyhow!("Start zone {} is not in the world", start_zone))?;
    let problems = world.problems(start)?;
    Ok(problems.iter().map(|p| p.to_string()).collect())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity wins over the configured level
    let base_level = match (verbosity, config) {
        (0, Some(cfg)) => cfg.log_level(),
        (0, None) => log::LevelFilter::Info,
        (1, _) => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Echo to the console only when someone is watching it
        let is_tty = atty::is(atty::Stream::Stdout);

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
