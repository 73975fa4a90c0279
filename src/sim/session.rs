//! One run of the game: player, obstacles, score and phase
//!
//! The session owns every piece of mutable simulation state. The frame loop
//! calls [`Session::tick`] once per frame and [`Session::restart`] on the
//! restart signal.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision;
use super::kinematics::{self, Bounds};
use super::spawn::{ObstacleGenerator, RandomSource};
use super::state::{GamePhase, Obstacle, Player};
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Per-tick input (already edge-detected by the input layer)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// A fresh jump press is pending
    pub jump: bool,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { id: u32 },
    Scored { score: u32 },
    NewHighScore { score: u32 },
    GameOver { score: u32 },
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = Pcg32> {
    pub tuning: Tuning,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub high_score: HighScore,
    pub phase: GamePhase,
    pub generator: ObstacleGenerator,
    /// Simulation tick counter (reset on restart)
    pub time_ticks: u64,
    rng: R,
}

impl Session<Pcg32> {
    /// New session with a seeded RNG
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(tuning: Tuning, mut rng: R) -> Self {
        let generator = ObstacleGenerator::new(&tuning, &mut rng);
        log::info!("Session started");
        Self {
            player: Player::new(&tuning, 0),
            tuning,
            obstacles: Vec::new(),
            score: 0,
            high_score: HighScore::new(),
            phase: GamePhase::Running,
            generator,
            time_ticks: 0,
            rng,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Advance one frame. Does nothing once the run is over.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.is_game_over() {
            return events;
        }
        let dt = self.tuning.clamp_delta(dt);
        self.time_ticks += 1;

        if let Some(obstacle) =
            self.generator
                .maybe_spawn(&self.tuning, &mut self.rng, dt, self.score)
        {
            events.push(GameEvent::Spawned { id: obstacle.id });
            self.obstacles.push(obstacle);
        }

        let canvas_height = self.tuning.canvas_height;
        let cleared = self
            .obstacles
            .iter_mut()
            .map(|o| o.advance(canvas_height))
            .filter(|&scored| scored)
            .count() as u32;
        self.obstacles.retain(|o| !o.marked_for_removal);
        if cleared > 0 {
            self.add_score(cleared, &mut events);
        }

        let bounds = kinematics::integrate(&mut self.player, dt, input.jump, canvas_height);
        let hit = collision::check(&self.player, &self.obstacles, self.tuning.collision_margin);

        if bounds == Bounds::Floor || hit {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game Over, score: {} ({})",
                self.score,
                if hit { "obstacle" } else { "floor" }
            );
            events.push(GameEvent::GameOver { score: self.score });
        }

        events
    }

    fn add_score(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.score += points;
        self.player.apply_difficulty(&self.tuning, self.score);
        events.push(GameEvent::Scored { score: self.score });
        if self.high_score.record(self.score) {
            events.push(GameEvent::NewHighScore { score: self.score });
        }
    }

    /// Reset everything except the high score
    pub fn restart(&mut self) {
        log::info!(
            "Restart (last score {}, high score {})",
            self.score,
            self.high_score.best()
        );
        self.player = Player::new(&self.tuning, 0);
        self.obstacles.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.generator = ObstacleGenerator::new(&self.tuning, &mut self.rng);
        self.phase = GamePhase::Running;
    }
}
