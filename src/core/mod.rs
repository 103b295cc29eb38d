//! Core primitives.
//!
//! Vector types and state hashing shared by the locomotion modules.

pub mod vec;
pub mod hash;

// Re-export core types
pub use vec::{Vec2, Vec3};
pub use hash::{StateHash, StateHasher, compute_state_hash};
