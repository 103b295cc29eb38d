//! Locomotion Logic Module
//!
//! All per-tick simulation code. Deterministic given the same inputs and `dt`.
//!
//! ## Module Structure
//!
//! - `config`: Per-actor tuning, JSON loading, validation
//! - `input`: Per-tick input snapshot, delta-compressed recording
//! - `stamina`: Sprint/stamina state machine
//! - `speed`: Effective speed resolver
//! - `kinematics`: Horizontal/vertical integration, collaborator traits
//! - `state`: Actor state and hashing
//! - `controller`: Per-tick pipeline
//! - `events`: Edges for presentation and replay
//! - `status`: Stamina bar view model
//! - `tick`: Headless replay

pub mod config;
pub mod input;
pub mod stamina;
pub mod speed;
pub mod kinematics;
pub mod state;
pub mod controller;
pub mod events;
pub mod status;
pub mod tick;

// Re-export key types
pub use config::{ConfigError, LocomotionConfig};
pub use controller::{LocomotionController, TickResult};
pub use events::{LocomotionEvent, LocomotionEventData};
pub use input::{InputFrame, InputRecording, RecordingError};
pub use kinematics::{Displacement, Facing, Mover, Yaw};
pub use stamina::{SprintStamina, SprintTransition, StopReason};
pub use state::LocomotionState;
pub use status::{SprintMode, SprintStatus};
