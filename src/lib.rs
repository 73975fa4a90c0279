//! Gap Runner - A gravity-driven gap runner arcade game
//!
//! Core modules:
//! - `sim`: Simulation (kinematics, obstacles, collisions, session state)
//! - `tuning`: Data-driven game balance and difficulty curves
//! - `renderer`: Draw command stream consumed by a platform renderer
//! - `platform`: Input latches and frame clock
//! - `game_loop`: Frame-driven loop that ties the pieces together

pub mod game_loop;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game_loop::{GameLoop, LoopControl};
pub use highscores::HighScore;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 70.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 150.0;

    /// Largest frame delta the simulation accepts (ms)
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;

    /// Nominal frame delta at 60 Hz (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Colours
    pub const PLAYER_COLOR: &str = "blue";
    pub const GAP_COLOR: &str = "green";
    pub const WALL_COLOR: &str = "red";
    pub const TEXT_COLOR: &str = "white";
    pub const FONT: &str = "30px Arial";
}
