//! Input Snapshot and Recording
//!
//! One `InputFrame` is sampled per tick and held constant for that tick.
//! `InputRecording` stores a delta-compressed stream of frames for replay.

use serde::{Serialize, Deserialize};
use tracing::warn;

use crate::core::hash::{StateHash, StateHasher};
use crate::core::vec::Vec2;

// =============================================================================
// INPUT FRAME
// =============================================================================

/// Input state for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Movement axes: `x` = strafe, `y` = forward, conventionally in [-1, 1]
    pub move_axes: Vec2,

    /// Action flags (packed bits):
    /// - Bit 0: Jump pressed this tick (edge)
    /// - Bit 1: Sprint held
    /// - Bit 2-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x01;

    /// Sprint flag bit
    pub const FLAG_SPRINT: u8 = 0x02;

    /// Idle frame: no movement, no actions.
    pub const IDLE: Self = Self {
        move_axes: Vec2::ZERO,
        flags: 0,
    };

    /// Create input with movement direction.
    pub const fn with_movement(x: f32, y: f32) -> Self {
        Self {
            move_axes: Vec2::new(x, y),
            flags: 0,
        }
    }

    /// Builder: hold sprint.
    pub const fn sprinting(mut self) -> Self {
        self.flags |= Self::FLAG_SPRINT;
        self
    }

    /// Builder: press jump.
    pub const fn jumping(mut self) -> Self {
        self.flags |= Self::FLAG_JUMP;
        self
    }

    /// Check if jump was pressed this tick.
    #[inline]
    pub fn jump_pressed(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }

    /// Check if sprint is held.
    #[inline]
    pub fn sprint_held(&self) -> bool {
        self.flags & Self::FLAG_SPRINT != 0
    }

    /// Set jump flag.
    #[inline]
    pub fn set_jump(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_JUMP;
        } else {
            self.flags &= !Self::FLAG_JUMP;
        }
    }

    /// Set sprint flag.
    #[inline]
    pub fn set_sprint(&mut self, held: bool) {
        if held {
            self.flags |= Self::FLAG_SPRINT;
        } else {
            self.flags &= !Self::FLAG_SPRINT;
        }
    }

    /// Copy with non-finite axes zeroed.
    #[inline]
    pub fn sanitized(&self) -> Self {
        Self {
            move_axes: self.move_axes.finite_or_zero(),
            flags: self.flags,
        }
    }
}

// =============================================================================
// RECORDING
// =============================================================================

/// Recording decode errors.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    /// Bytes are not a valid recording
    #[error("failed to decode recording: {0}")]
    Decode(#[from] bincode::Error),

    /// Recording tick duration is unusable
    #[error("recording has invalid tick duration {0}")]
    InvalidDt(f32),
}

/// Input change starting at a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputDelta {
    /// Tick when this input state began
    pub tick: u32,
    /// The new input state
    pub frame: InputFrame,
}

/// Delta-compressed input stream for one actor.
///
/// Only ticks where the frame changed are stored. A jump press is its own
/// frame, so the edge survives compression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecording {
    /// Fixed tick duration in seconds
    pub dt: f32,

    /// Number of ticks covered, counted from tick 0
    tick_count: u32,

    deltas: Vec<InputDelta>,

    /// Last recorded input (for delta comparison)
    #[serde(skip)]
    last_frame: InputFrame,
}

impl InputRecording {
    /// Create an empty recording with a fixed tick duration.
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            tick_count: 0,
            deltas: Vec::new(),
            last_frame: InputFrame::IDLE,
        }
    }

    /// Record a contiguous stream of frames, starting at tick 0.
    pub fn from_frames(dt: f32, frames: impl IntoIterator<Item = InputFrame>) -> Self {
        let mut recording = Self::new(dt);
        for (tick, frame) in frames.into_iter().enumerate() {
            recording.record(tick as u32, frame);
        }
        recording
    }

    /// Record input for a tick. Only stored if it differs from the previous one.
    ///
    /// Ticks must arrive in increasing order; a tick already covered by the
    /// recording is dropped.
    pub fn record(&mut self, tick: u32, frame: InputFrame) {
        if tick < self.tick_count {
            warn!(tick, recorded = self.tick_count, "input for past tick ignored");
            return;
        }
        self.tick_count = tick.saturating_add(1);

        if frame != self.last_frame {
            self.deltas.push(InputDelta { tick, frame });
            self.last_frame = frame;
        }
    }

    /// Stored deltas.
    pub fn deltas(&self) -> &[InputDelta] {
        &self.deltas
    }

    /// Number of ticks covered (0 if nothing was recorded).
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Iterate `(tick, frame)` for every tick in the recording.
    pub fn replay_iter(&self) -> impl Iterator<Item = (u32, InputFrame)> + '_ {
        let mut delta_idx = 0;
        let mut current = InputFrame::IDLE;
        (0..self.tick_count()).map(move |tick| {
            while delta_idx < self.deltas.len() && self.deltas[delta_idx].tick <= tick {
                current = self.deltas[delta_idx].frame;
                delta_idx += 1;
            }
            (tick, current)
        })
    }

    /// Encode to compact binary.
    pub fn encode(&self) -> Result<Vec<u8>, RecordingError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from binary produced by [`InputRecording::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordingError> {
        let mut recording: Self = bincode::deserialize(bytes)?;
        if !recording.dt.is_finite() || recording.dt < 0.0 {
            return Err(RecordingError::InvalidDt(recording.dt));
        }
        recording.last_frame = recording
            .deltas
            .last()
            .map(|d| d.frame)
            .unwrap_or(InputFrame::IDLE);
        Ok(recording)
    }

    /// Fingerprint of the recorded input stream.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_input_recording();
        hasher.update_f32(self.dt);
        hasher.update_u32(self.tick_count);
        for delta in &self.deltas {
            hasher.update_u32(delta.tick);
            hasher.update_vec2(delta.frame.move_axes);
            hasher.update_u8(delta.frame.flags);
        }
        hasher.finalize()
    }
}

// =============================================================================
// TESTS
// =============================================================================
