//! Sprint Locomotion Simulator
//!
//! Runs a scripted input session through the controller, logs every
//! locomotion event, then replays the recorded inputs and checks the final
//! state hash matches.
//!
//! Usage: `locomotion-sim [config.json]`

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use locomotion::{
    FIXED_DT, TICK_RATE, VERSION,
    game::{
        config::LocomotionConfig,
        controller::LocomotionController,
        events::LocomotionEventData,
        input::{InputFrame, InputRecording},
        kinematics::Yaw,
        status::SprintStatus,
        tick::{replay, FlatGround},
    },
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Sprint Locomotion v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let config = match std::env::args().nth(1) {
        Some(path) => LocomotionConfig::load(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => LocomotionConfig::default(),
    };
    info!(?config, "config");

    demo_session(config)
}

/// Scripted session: walk, sprint to exhaustion, wait out the cooldown,
/// jump, then sprint again.
fn scripted_frames() -> Vec<InputFrame> {
    let seconds = |s: f32| (s * TICK_RATE as f32) as usize;
    let forward = InputFrame::with_movement(0.0, 1.0);

    let mut frames = Vec::new();
    frames.extend(std::iter::repeat(forward).take(seconds(1.0)));
    frames.extend(std::iter::repeat(forward.sprinting()).take(seconds(12.0)));
    frames.extend(std::iter::repeat(InputFrame::IDLE).take(seconds(11.0)));
    frames.push(InputFrame::IDLE.jumping());
    frames.extend(std::iter::repeat(InputFrame::IDLE).take(seconds(2.0)));
    frames.extend(std::iter::repeat(InputFrame::with_movement(0.5, 1.0).sprinting()).take(seconds(3.0)));
    frames
}

fn demo_session(config: LocomotionConfig) -> Result<()> {
    info!("=== Starting Demo Session ===");

    let mut controller = LocomotionController::new(config)?;
    let mut ground = FlatGround::default();
    let facing = Yaw::from_degrees(30.0);

    let frames = scripted_frames();
    let mut recording = InputRecording::new(FIXED_DT);
    let mut last_status = SprintStatus::from_state(controller.state());

    for (t, frame) in frames.iter().enumerate() {
        recording.record(t as u32, *frame);
        let result = controller.tick(frame, FIXED_DT, Some(&facing), &mut ground);

        for event in &result.events {
            match &event.data {
                LocomotionEventData::SprintStopped { reason, stamina, cooldown } => {
                    info!(tick = event.tick, ?reason, stamina, cooldown, "sprint stopped");
                }
                other => info!(tick = event.tick, event = ?other, "event"),
            }
        }

        let status = SprintStatus::from_state(controller.state());
        if status.mode != last_status.mode {
            info!(tick = controller.tick_count(), mode = ?status.mode, label = %status.label, "hud");
        }
        last_status = status;
    }

    let state = controller.state();
    let hash = state.compute_hash(controller.tick_count());
    info!("=== Session Results ===");
    info!("Position: {}", ground.position());
    info!(
        "Stamina: {:.2}/{:.2}, available: {}",
        state.stamina(),
        state.stamina_max(),
        state.sprint_available()
    );
    info!("Final State Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let encoded = recording.encode()?;
    info!("Recording: {} deltas, {} bytes", recording.deltas().len(), encoded.len());
    let decoded = InputRecording::decode(&encoded)?;
    let outcome = replay(config, &decoded, Some(&facing))?;
    info!("Replay State Hash: {}", hex::encode(outcome.final_hash));

    if outcome.final_hash != hash {
        bail!("determinism failure: replay hash differs");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");
    Ok(())
}
