use std::path::PathBuf;

use blackbox::{visualize_session, GameSession, Grid};
use blackbox_cli::{serve, LayoutConfig, Recorder};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Hosts one game of Black Box. Requests are read as JSON lines from stdin,
/// responses are written as JSON lines to stdout.
#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the atom positions
    #[arg(short, long)]
    atoms: Option<PathBuf>,

    /// How many atoms to place randomly, if no atoms file is given
    #[arg(short, long, default_value_t = 4)]
    num_atoms: usize,

    /// RNG seed for placing the atoms
    #[arg(long)]
    seed: Option<u64>,

    /// Record the session's requests and responses as a JSON file into this directory
    #[arg(short, long)]
    record_session_to_directory: Option<PathBuf>,

    /// Print the board with all atoms to stderr when the session ends
    #[arg(long, default_value_t = false)]
    reveal_on_exit: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let grid = if let Some(path) = &args.atoms {
        info!(path = %path.display(), "Loading atoms");
        LayoutConfig::load(path)?.into_grid()?
    } else {
        // Get a random seed
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, num_atoms = args.num_atoms, "Placing atoms randomly");
        let mut rng = StdRng::seed_from_u64(seed);
        Grid::random(args.num_atoms, &mut rng)?
    };

    let mut recorder = if let Some(dir_path) = args.record_session_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut game = GameSession::from_grid(grid);
    info!(atoms = game.atoms_remaining(), "Starting game");

    serve(
        &mut game,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        &mut recorder,
    )?;

    if let Some(rec) = &mut recorder {
        let path = rec.write_session_recording(&game)?;
        info!(path = %path.display(), "Wrote recording");
    }

    let summary = game.summary();
    info!(
        score = summary.score,
        atoms_remaining = summary.atoms_remaining,
        status = %summary.status,
        "Session ended"
    );
    if args.reveal_on_exit {
        eprintln!("{}", visualize_session(&game, true));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout is reserved for responses
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
