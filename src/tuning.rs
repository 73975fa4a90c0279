//! Data-driven game balance
//!
//! Every hand-tuned number lives in [`Tuning`]. The difficulty curves are
//! pure functions of score/tier so they can be checked in isolation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading a tuning table
#[derive(Debug)]
pub enum TuningError {
    /// Input was not valid JSON for a `Tuning`
    Parse(serde_json::Error),
    /// Parsed, but a value would break the simulation
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "tuning parse error: {}", e),
            TuningError::Invalid(msg) => write!(f, "invalid tuning: {}", msg),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub player_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Velocity gained per tick at score 0 (px/ms)
    pub base_gravity: f32,
    pub gravity_per_score: f32,
    pub max_gravity: f32,
    /// Jump impulse at score 0 (px/ms², negative is up)
    pub base_jump: f32,
    pub jump_per_score: f32,
    /// Largest jump magnitude
    pub max_jump: f32,
    /// Frame deltas are clamped to `[0, max_frame_delta]` (ms)
    pub max_frame_delta: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Score points per difficulty tier
    pub scores_per_tier: u32,
    pub base_gap_height: f32,
    /// Last tier of the first gap band, and its shrink per tier
    pub gap_band1_end: u32,
    pub gap_band1_step: f32,
    pub gap_band2_end: u32,
    pub gap_band2_step: f32,
    pub gap_band3_end: u32,
    pub gap_band3_step: f32,
    /// Past the last band the gap is randomised upward by up to this much
    pub late_gap_growth_per_tier: f32,
    pub late_gap_growth_max: f32,
    /// Pixels per tick
    pub base_speed: f32,
    pub speed_per_tier: f32,
    pub max_speed: f32,
    /// Oscillation is zero below this tier
    pub oscillation_start_tier: u32,
    pub oscillation_per_tier: f32,
    pub max_oscillation: f32,

    // === Spawning ===
    /// Base spawn interval (ms)
    pub spawn_interval: f32,
    /// Score at which jitter stops shrinking and becomes fixed
    pub hard_score: u32,
    pub jitter_offset: f32,
    pub jitter_span: f32,
    pub jitter_span_per_score: f32,
    pub min_jitter_span: f32,
    pub hard_jitter_offset: f32,
    pub hard_jitter_span: f32,

    // === Collision ===
    /// Forgiveness distance on the gap edges
    pub collision_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            base_gravity: 0.03,
            gravity_per_score: 0.0004,
            max_gravity: 0.06,
            base_jump: -0.04,
            jump_per_score: -0.0002,
            max_jump: 0.06,
            max_frame_delta: MAX_FRAME_DELTA_MS,

            obstacle_width: OBSTACLE_WIDTH,
            scores_per_tier: 5,
            base_gap_height: 250.0,
            gap_band1_end: 10,
            gap_band1_step: 5.0,
            gap_band2_end: 20,
            gap_band2_step: 4.0,
            gap_band3_end: 30,
            gap_band3_step: 2.0,
            late_gap_growth_per_tier: 2.0,
            late_gap_growth_max: 80.0,
            base_speed: 5.0,
            speed_per_tier: 0.5,
            max_speed: 12.0,
            oscillation_start_tier: 11,
            oscillation_per_tier: 0.25,
            max_oscillation: 3.0,

            spawn_interval: 1000.0,
            hard_score: 40,
            jitter_offset: 500.0,
            jitter_span: 1000.0,
            jitter_span_per_score: 20.0,
            min_jitter_span: 200.0,
            hard_jitter_offset: 250.0,
            hard_jitter_span: 200.0,

            collision_margin: 10.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning table. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return invalid("canvas dimensions must be positive");
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return invalid("player size must be positive");
        }
        if self.player_height > self.canvas_height {
            return invalid("player taller than canvas");
        }
        let lowest_start = self.canvas_height - self.player_height;
        if !(self.player_start_y >= 0.0 && self.player_start_y <= lowest_start) {
            return invalid("player must start inside the canvas");
        }
        if !(self.max_gravity >= 0.0) {
            return invalid("max_gravity must not be negative");
        }
        if !(self.max_jump >= 0.0) {
            return invalid("max_jump must not be negative");
        }
        if self.obstacle_width <= 0.0 {
            return invalid("obstacle width must be positive");
        }
        if self.scores_per_tier == 0 {
            return invalid("scores_per_tier must be non-zero");
        }
        if !(self.gap_band1_end <= self.gap_band2_end && self.gap_band2_end <= self.gap_band3_end) {
            return invalid("gap bands must be ordered");
        }
        if !(self.gap_band1_step >= 0.0 && self.gap_band2_step >= 0.0 && self.gap_band3_step >= 0.0) {
            return invalid("gap band steps must not be negative");
        }
        if !(self.late_gap_growth_per_tier >= 0.0 && self.late_gap_growth_max >= 0.0) {
            return invalid("late gap growth must not be negative");
        }
        let tightest = self.gap_height_at_band_end();
        if tightest <= 0.0 {
            return invalid("gap bands shrink below zero");
        }
        if self.base_gap_height > self.canvas_height
            || tightest + self.late_gap_growth_max > self.canvas_height
        {
            return invalid("gap taller than canvas");
        }
        if self.collision_margin < 0.0 {
            return invalid("collision margin must not be negative");
        }
        if self.max_frame_delta <= 0.0 {
            return invalid("max_frame_delta must be positive");
        }
        let timings = [
            self.spawn_interval,
            self.jitter_offset,
            self.min_jitter_span,
            self.hard_jitter_offset,
            self.hard_jitter_span,
        ];
        if !timings.iter().all(|t| *t >= 0.0) {
            return invalid("spawn timings must not be negative");
        }
        Ok(())
    }

    /// Clamp a raw frame delta into the range the simulation accepts
    pub fn clamp_delta(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_delta)
    }

    /// Difficulty tier for a score
    pub fn tier(&self, score: u32) -> u32 {
        score / self.scores_per_tier
    }

    /// Gravity for a given score
    pub fn gravity(&self, score: u32) -> f32 {
        (self.base_gravity + self.gravity_per_score * score as f32).min(self.max_gravity)
    }

    /// Jump impulse for a given score (negative is up; magnitude grows)
    pub fn jump_impulse(&self, score: u32) -> f32 {
        let jump = self.base_jump + self.jump_per_score * score as f32;
        let cap = self.max_jump.abs();
        jump.max(-cap).min(cap)
    }

    fn gap_height_at_band_end(&self) -> f32 {
        self.base_gap_height
            - self.gap_band1_step * self.gap_band1_end as f32
            - self.gap_band2_step * (self.gap_band2_end - self.gap_band1_end) as f32
            - self.gap_band3_step * (self.gap_band3_end - self.gap_band2_end) as f32
    }

    /// Gap height for a tier. `unit` in `[0, 1)` is only used past the last band.
    pub fn gap_height(&self, tier: u32, unit: f32) -> f32 {
        let band1_floor = self.base_gap_height - self.gap_band1_step * self.gap_band1_end as f32;
        let band2_floor =
            band1_floor - self.gap_band2_step * (self.gap_band2_end - self.gap_band1_end) as f32;

        if tier <= self.gap_band1_end {
            self.base_gap_height - self.gap_band1_step * tier as f32
        } else if tier <= self.gap_band2_end {
            band1_floor - self.gap_band2_step * (tier - self.gap_band1_end) as f32
        } else if tier <= self.gap_band3_end {
            band2_floor - self.gap_band3_step * (tier - self.gap_band2_end) as f32
        } else {
            let growth = (self.late_gap_growth_per_tier * (tier - self.gap_band3_end) as f32)
                .min(self.late_gap_growth_max);
            self.gap_height_at_band_end() + unit * growth
        }
    }

    /// Obstacle speed (px/tick) for a tier
    pub fn speed(&self, tier: u32) -> f32 {
        (self.base_speed + self.speed_per_tier * tier as f32).min(self.max_speed)
    }

    /// Unsigned oscillation rate (px/tick) for a tier
    pub fn oscillation(&self, tier: u32) -> f32 {
        if tier < self.oscillation_start_tier {
            return 0.0;
        }
        let above = (tier - self.oscillation_start_tier + 1) as f32;
        (self.oscillation_per_tier * above).min(self.max_oscillation)
    }

    /// Spawn jitter (ms) for a score, given `unit` in `[0, 1)`
    pub fn jitter(&self, score: u32, unit: f32) -> f32 {
        if score >= self.hard_score {
            self.hard_jitter_offset + unit * self.hard_jitter_span
        } else {
            let span = (self.jitter_span - self.jitter_span_per_score * score as f32)
                .max(self.min_jitter_span);
            self.jitter_offset + unit * span
        }
    }
}
