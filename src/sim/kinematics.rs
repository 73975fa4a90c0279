//! Player motion integration
//!
//! Gravity accumulates once per tick (not scaled by dt). A jump overwrites
//! the velocity with `jump * dt`. Position then advances by `velocity * dt`.

use super::state::Player;

/// Where the player ended up relative to the canvas edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    Inside,
    /// Clamped to the ceiling (harmless)
    Ceiling,
    /// Clamped to the floor (ends the run)
    Floor,
}

/// Integrate one tick. `dt` must already be clamped non-negative.
pub fn integrate(player: &mut Player, dt: f32, jump_requested: bool, canvas_height: f32) -> Bounds {
    player.velocity += player.gravity;
    if jump_requested {
        player.velocity = player.jump * dt;
    }
    player.y += player.velocity * dt;

    let floor = canvas_height - player.height;
    if player.y > floor {
        player.y = floor;
        player.velocity = 0.0;
        Bounds::Floor
    } else if player.y < 0.0 {
        player.y = 0.0;
        player.velocity = 0.0;
        Bounds::Ceiling
    } else {
        Bounds::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn player() -> Player {
        Player::new(&Tuning::default(), 0)
    }

    #[test]
    fn test_gravity_not_scaled_by_dt() {
        let mut a = player();
        let mut b = player();
        integrate(&mut a, 10.0, false, 720.0);
        integrate(&mut b, 20.0, false, 720.0);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.velocity, a.gravity);
        assert!(b.y > a.y);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut p = player();
        p.y = 400.0;
        p.velocity = 5.0;
        integrate(&mut p, 16.0, true, 720.0);
        assert_eq!(p.velocity, p.jump * 16.0);
        assert!(p.y < 400.0);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut p = player();
        let y = p.y;
        assert_eq!(integrate(&mut p, 0.0, true, 720.0), Bounds::Inside);
        assert_eq!(p.y, y);
    }

    #[test]
    fn test_floor_clamp() {
        let mut p = player();
        p.y = 640.0;
        p.velocity = 1.0;
        assert_eq!(integrate(&mut p, 16.0, false, 720.0), Bounds::Floor);
        assert_eq!(p.y, 650.0);
        assert_eq!(p.velocity, 0.0);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut p = player();
        p.y = 2.0;
        assert_eq!(integrate(&mut p, 16.0, true, 720.0), Bounds::Ceiling);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.velocity, 0.0);
    }
}
