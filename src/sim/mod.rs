//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time enters only as a clamped per-frame delta
//! - Randomness comes through a seedable [`RandomSource`]
//! - The [`Session`] owns every piece of mutable state

pub mod autopilot;
pub mod collision;
pub mod kinematics;
pub mod session;
pub mod spawn;
pub mod state;

pub use autopilot::autopilot;
pub use collision::{Rect, check, player_hits_obstacle};
pub use kinematics::{Bounds, integrate};
pub use session::{GameEvent, Session, TickInput};
pub use spawn::{FixedRandom, ObstacleGenerator, RandomSource};
pub use state::{GamePhase, Obstacle, Player};
