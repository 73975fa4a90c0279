//! Platform abstraction layer
//!
//! The simulation never sees raw events or timestamps. This layer turns:
//! - Key/touch edges into latched logical actions ([`InputState`])
//! - Monotonic timestamps into clamped frame deltas ([`FrameClock`])

pub mod input;
pub mod time;

pub use input::{Action, InputState};
pub use time::FrameClock;
