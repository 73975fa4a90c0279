//! Game state and core simulation types

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// The player-controlled entity. `x` never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (px/ms, positive is down)
    pub velocity: f32,
    /// Velocity gained per tick
    pub gravity: f32,
    /// Jump impulse (velocity becomes `jump * dt`)
    pub jump: f32,
}

impl Player {
    /// Player at the start position with difficulty for `score`
    pub fn new(tuning: &Tuning, score: u32) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.player_start_y,
            width: tuning.player_width,
            height: tuning.player_height,
            velocity: 0.0,
            gravity: tuning.gravity(score),
            jump: tuning.jump_impulse(score),
        }
    }

    /// Recompute gravity/jump from the current score
    pub fn apply_difficulty(&mut self, tuning: &Tuning, score: u32) {
        self.gravity = tuning.gravity(score);
        self.jump = tuning.jump_impulse(score);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A gap obstacle scrolling right to left
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    /// Top of the passable gap
    pub gap_y: f32,
    pub gap_height: f32,
    /// Tier of the score at spawn time
    pub tier: u32,
    /// Pixels per tick
    pub speed: f32,
    /// Signed vertical drift of the gap (px/tick); zero for low tiers
    pub oscillation: f32,
    /// Set once the trailing edge leaves the screen
    pub marked_for_removal: bool,
}

impl Obstacle {
    /// Advance one tick. Returns true the first time the obstacle
    /// is fully off-screen (the caller scores it).
    pub fn advance(&mut self, canvas_height: f32) -> bool {
        self.x -= self.speed;

        if self.oscillation != 0.0 {
            let max_y = canvas_height - self.gap_height;
            self.gap_y += self.oscillation;
            if self.gap_y < 0.0 {
                self.gap_y = 0.0;
                self.oscillation = -self.oscillation;
            } else if self.gap_y > max_y {
                self.gap_y = max_y;
                self.oscillation = -self.oscillation;
            }
        }

        if !self.marked_for_removal && self.x + self.width < 0.0 {
            self.marked_for_removal = true;
            return true;
        }
        false
    }

    /// Bottom edge of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height
    }

    /// Solid wall above the gap
    pub fn upper_wall(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_y)
    }

    /// Solid wall below the gap, down to the canvas floor
    pub fn lower_wall(&self, canvas_height: f32) -> Rect {
        let top = self.gap_bottom();
        Rect::new(self.x, top, self.width, (canvas_height - top).max(0.0))
    }

    pub fn gap_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_y, self.width, self.gap_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(x: f32, gap_y: f32, oscillation: f32) -> Obstacle {
        Obstacle {
            id: 1,
            x,
            width: 150.0,
            gap_y,
            gap_height: 200.0,
            tier: 0,
            speed: 5.0,
            oscillation,
            marked_for_removal: false,
        }
    }

    #[test]
    fn test_player_new_uses_score_difficulty() {
        let tuning = Tuning::default();
        let p0 = Player::new(&tuning, 0);
        let p30 = Player::new(&tuning, 30);
        assert_eq!(p0.y, 50.0);
        assert_eq!(p0.x, 100.0);
        assert!(p30.gravity > p0.gravity);
        assert!(p30.jump.abs() > p0.jump.abs());
    }

    #[test]
    fn test_obstacle_marks_once() {
        let mut o = obstacle(-150.0, 100.0, 0.0);
        assert!(o.advance(720.0));
        assert!(o.marked_for_removal);
        assert!(!o.advance(720.0));
    }

    #[test]
    fn test_obstacle_not_marked_while_visible() {
        let mut o = obstacle(0.0, 100.0, 0.0);
        assert!(!o.advance(720.0));
        assert_eq!(o.x, -5.0);
        assert!(!o.marked_for_removal);
    }

    #[test]
    fn test_oscillation_reflects_at_top() {
        let mut o = obstacle(400.0, 1.0, -3.0);
        o.advance(720.0);
        assert_eq!(o.gap_y, 0.0);
        assert_eq!(o.oscillation, 3.0);
        o.advance(720.0);
        assert_eq!(o.gap_y, 3.0);
    }

    #[test]
    fn test_oscillation_reflects_at_bottom() {
        let mut o = obstacle(400.0, 519.0, 3.0);
        o.advance(720.0);
        assert_eq!(o.gap_y, 520.0);
        assert_eq!(o.oscillation, -3.0);
    }

    #[test]
    fn test_walls_span_canvas() {
        let o = obstacle(300.0, 100.0, 0.0);
        let upper = o.upper_wall();
        let lower = o.lower_wall(720.0);
        assert_eq!(upper.y, 0.0);
        assert_eq!(upper.h, 100.0);
        assert_eq!(lower.y, 300.0);
        assert_eq!(lower.y + lower.h, 720.0);
    }
}
