use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::{PlayerConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog with playback and playlists", long_about = None)]
struct Args {
    /// Path to a video catalog (videos.txt format); built-in catalog if omitted
    #[arg(short = 'c', long = "videos")]
    videos: Option<String>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new();

    // Expand ~ in paths
    if let Some(videos) = &args.videos {
        let path = shellexpand::tilde(videos);
        config = config.with_catalog(PathBuf::from(path.as_ref()));
    }
    if let Some(seed) = args.seed {
        log::info!("Random seed: {}", seed);
        config = config.with_seed(seed);
    }

    let mut player = config.build_player()?;
    log::info!(
        "Catalog ready: {} videos",
        player.library().video_count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut player).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
