//! Penalty Kick Demo
//!
//! Plays one game against the real session runtime with an automatic
//! player, then replays the transcript to check the result.
//!
//! Usage: `penalty-kick [config.json]`

use std::time::Duration;

use anyhow::{bail, Context};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use penalty_kick::{
    DeterministicRng, GameConfig, GameSummary, SessionManager, ShotPhase, VERSION,
    game::{events::EngineEventData, replay},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json_file(&path).with_context(|| format!("loading {path}"))?,
        None => GameConfig::default(),
    };

    info!("Penalty Kick Engine v{}", VERSION);
    info!(
        "Shots: {}, power tick {}ms, direction tick {}ms",
        config.engine.shots_per_game,
        config.engine.power_meter.period_ms,
        config.engine.direction_meter.period_ms,
    );

    demo_game(config).await
}

/// Autoplay one game and verify its transcript.
async fn demo_game(config: GameConfig) -> anyhow::Result<()> {
    info!("=== Starting Demo Game ===");

    let session_id = [1u8; 16];
    let seed = 12345u64;
    info!("Session ID: {}", hex::encode(session_id));
    info!("RNG Seed: {}", seed);

    let manager = SessionManager::new(config)?;
    let (summary_tx, mut summary_rx) = mpsc::unbounded_channel();
    manager
        .start_game_seeded(session_id, seed, move |summary: GameSummary| {
            let _ = summary_tx.send(summary);
        })
        .await?;

    let mut events = manager.subscribe(&session_id).await?;
    let logger = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event.data {
                EngineEventData::DirectionLocked { direction, keeper } => {
                    info!(
                        "Shot {}: direction {}, keeper dives to {:.1}",
                        event.shot,
                        direction,
                        penalty_kick::core::fixed::to_float(keeper)
                    );
                }
                EngineEventData::ShotResolved { result, score } => {
                    info!("Shot {}: {:?} (score {})", event.shot, result, score);
                }
                EngineEventData::GameEnded { score } => {
                    info!("Game over! Final score: {}", score);
                    break;
                }
                _ => {}
            }
        }
    });

    // The "player" waits a seeded, varying time before each press
    let mut player = DeterministicRng::new(seed ^ 0x5EED);
    loop {
        let phase = manager.snapshot(&session_id).await?.phase;
        let wait = match phase {
            ShotPhase::Power => 100 + player.next_u64() % 600,
            ShotPhase::Direction => 50 + player.next_u64() % 500,
            ShotPhase::Shooting => 50,
            ShotPhase::Ready | ShotPhase::Result => 300,
        };
        tokio::time::sleep(Duration::from_millis(wait)).await;

        if phase == ShotPhase::Shooting {
            continue;
        }
        let ack = manager.trigger(&session_id).await?;
        if let Some(score) = ack.game_over {
            info!("Host saw game end with score {}", score);
            break;
        }
    }

    let summary = summary_rx.recv().await.context("session ended without a summary")?;
    let _ = logger.await;

    info!("=== Shots ===");
    for shot in &summary.shots {
        info!(
            "#{}: power {:>3}, direction {:>3} -> {:?}",
            shot.shot, shot.power, shot.direction, shot.result
        );
    }
    info!("Goals: {}/{}", summary.goals().count(), summary.shots.len());
    info!("Final State Hash: {}", hex::encode(summary.final_hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let transcript = summary.transcript.context("session did not record a transcript")?;
    let bytes = transcript.to_bytes()?;
    info!("Transcript: {} inputs, {} bytes", transcript.inputs.len(), bytes.len());

    let decoded = replay::GameTranscript::from_bytes(&bytes)?;
    let replayed = replay::verify(&decoded)?;
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if replay_hash != summary.final_hash {
        bail!("DETERMINISM FAILURE: Hashes differ!");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    manager.end_game(&session_id).await?;
    Ok(())
}
