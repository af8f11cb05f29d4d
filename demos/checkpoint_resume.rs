//! Checkpoint and Resume
//!
//! This example interrupts a game at deuce, stores a checkpoint on disk and
//! picks the game back up from it.
//!
//! Key concepts:
//! - Checkpoints are plain values; the caller decides where they live
//! - JSON for readability, bincode for compactness
//! - Atomic writes to prevent corruption
//! - Resumed games are validated against the scoring rules
//!
//! Run with: cargo run --example checkpoint_resume

use deuce::checkpoint::{Checkpoint, CheckpointError};
use deuce::core::Player::{self, PlayerOne, PlayerTwo};
use deuce::engine::GameTracker;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

struct CheckpointStore {
    dir: PathBuf,
}

impl CheckpointStore {
    fn new(dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn save(&self, checkpoint: &Checkpoint) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.dir.join(format!("{}.json", checkpoint.id));
        let json = checkpoint.to_json()?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        info!("Saved checkpoint to {}", path.display());
        Ok(path)
    }

    fn load(&self, path: &Path) -> Result<Checkpoint, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        let checkpoint = Checkpoint::from_json(&json)?;
        info!("Loaded checkpoint from {}", path.display());
        Ok(checkpoint)
    }
}

fn play_until_rain(game: &mut GameTracker, winners: &[Player], rain_after: usize) {
    for winner in winners.iter().take(rain_after) {
        let score = game.score_point(*winner);
        println!("  {:<10} wins -> {}", winner, score);
    }
    println!("\n  [RAIN] Play suspended at {}\n", game.current_state());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("=== Checkpoint and Resume Example ===\n");

    let store = CheckpointStore::new(&std::env::temp_dir().join("deuce-checkpoints"))?;
    let winners = [
        PlayerOne, PlayerTwo, PlayerOne, PlayerTwo, PlayerOne, PlayerTwo, PlayerTwo, PlayerTwo,
    ];

    println!("Session 1: new game");
    println!("----------------------------------------");
    let mut game = GameTracker::new();
    play_until_rain(&mut game, &winners, 6);
    let path = store.save(&game.checkpoint())?;

    let bytes = game.checkpoint().to_bytes()?;
    println!(
        "Binary checkpoint is {} bytes, JSON is {} bytes\n",
        bytes.len(),
        fs::metadata(&path)?.len()
    );

    println!("Session 2: resume");
    println!("----------------------------------------");
    let mut resumed = GameTracker::resume(store.load(&path)?)?;
    println!("  Resumed at {}", resumed.current_state());
    for winner in &winners[6..] {
        let score = resumed.score_point(*winner);
        println!("  {:<10} wins -> {}", winner, score);
    }
    println!();

    println!("Session 3: tampered checkpoint");
    println!("----------------------------------------");
    let mut tampered = store.load(&path)?;
    tampered.current_state = deuce::core::ScoreState::Game { player: PlayerOne };
    match GameTracker::resume(tampered) {
        Err(CheckpointError::ValidationFailed(reason)) => println!("  Rejected: {}", reason),
        Err(e) => error!("Unexpected error: {}", e),
        Ok(_) => error!("Tampered checkpoint was accepted"),
    }

    fs::remove_dir_all(&store.dir).ok();

    println!("\nFinal score: {}", resumed.current_state());
    println!("\n=== Example Complete ===");
    Ok(())
}
