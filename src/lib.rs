//! # Sprint Locomotion
//!
//! Stamina-gated sprint and locomotion controller for a single actor,
//! advanced once per fixed simulation tick.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     SPRINT LOCOMOTION                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  core/            - Primitives                                │
//! │  ├── vec.rs       - Vec2 / Vec3                               │
//! │  └── hash.rs      - State hashing for replay verification     │
//! │                                                               │
//! │  game/            - Locomotion logic (deterministic)          │
//! │  ├── config.rs    - Tuning, JSON loading, validation          │
//! │  ├── input.rs     - Input snapshot and recording              │
//! │  ├── stamina.rs   - Sprint/stamina state machine              │
//! │  ├── speed.rs     - Effective speed                           │
//! │  ├── kinematics.rs- Integration, Mover / Facing traits        │
//! │  ├── state.rs     - Actor state                               │
//! │  ├── controller.rs- Per-tick pipeline                         │
//! │  ├── events.rs    - Edges for presentation / replay           │
//! │  ├── status.rs    - Stamina bar view model                    │
//! │  └── tick.rs      - Headless replay                           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tick Order
//!
//! state machine → speed resolver → integrator. Ground contact and input are
//! sampled once at the start of the tick and held for the whole tick.
//!
//! ## Determinism
//!
//! No global state, no wall clock: time only advances through the `dt`
//! passed to [`LocomotionController::tick`]. Given identical inputs and `dt`
//! sequence, the final state hash is identical.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::vec::{Vec2, Vec3};
pub use game::config::{ConfigError, LocomotionConfig};
pub use game::controller::{LocomotionController, TickResult};
pub use game::input::{InputFrame, InputRecording};
pub use game::kinematics::{Facing, Mover, Yaw};
pub use game::speed::effective_speed;
pub use game::state::LocomotionState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default simulation tick rate (Hz)
pub const TICK_RATE: u32 = 50;

/// Fixed tick duration at [`TICK_RATE`]
pub const FIXED_DT: f32 = 1.0 / TICK_RATE as f32;
