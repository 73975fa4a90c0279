//! Idle/demo controller
//!
//! Plays the game well enough for headless demos and soak tests. Aims the
//! player's bottom edge a cushion above the lower edge of the next gap.

use super::session::{Session, TickInput};
use super::spawn::RandomSource;

/// Distance kept between the player's bottom and the gap's lower edge
pub const CUSHION: f32 = 45.0;

/// Decide this tick's input for `session`
pub fn autopilot<R: RandomSource>(session: &Session<R>) -> TickInput {
    let player = &session.player;
    let target = session
        .obstacles
        .iter()
        .filter(|o| !o.marked_for_removal && o.x + o.width > player.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_bottom() - CUSHION)
        .unwrap_or(session.tuning.canvas_height * 0.6);

    // Only jump while falling so one press is not wasted on the next
    TickInput {
        jump: player.y + player.height > target && player.velocity >= 0.0,
    }
}
