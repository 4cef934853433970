//! Platform abstraction layer
//!
//! Collaborators the simulation core calls into rather than owns:
//! - Input: held keys and session commands
//! - Time: fixed-rate frame pacing
//! - Autopilot: a demo input source for headless runs

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputFrame, InputSource, Key, KeySet, ScriptedInput, SessionCommand};
pub use time::FrameClock;
