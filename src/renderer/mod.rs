//! Rendering boundary
//!
//! The game produces a flat list of 2D draw commands each frame; a platform
//! renderer (Canvas 2D on the web) executes them in order.

use crate::consts::*;
use crate::sim::{Rect, RandomSource, Session};

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole canvas
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: &'static str },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: &'static str,
        font: &'static str,
    },
}

/// Executes draw commands
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);
}

/// Stores every command (tests and headless runs)
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text draws, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}

/// Restart prompt shown once the run is over
pub const GAME_OVER_TEXT: &str = "Game Over, press Enter to restart";

/// Build the command list for the current session state
pub fn frame_commands<R: RandomSource>(session: &Session<R>) -> Vec<DrawCommand> {
    let width = session.tuning.canvas_width;
    let height = session.tuning.canvas_height;
    let mut commands = Vec::with_capacity(2 + session.obstacles.len() * 3 + 3);

    commands.push(DrawCommand::Clear { width, height });
    commands.push(DrawCommand::FillRect {
        rect: session.player.rect(),
        color: PLAYER_COLOR,
    });

    for obstacle in &session.obstacles {
        commands.push(DrawCommand::FillRect {
            rect: obstacle.gap_rect(),
            color: GAP_COLOR,
        });
        commands.push(DrawCommand::FillRect {
            rect: obstacle.upper_wall(),
            color: WALL_COLOR,
        });
        commands.push(DrawCommand::FillRect {
            rect: obstacle.lower_wall(height),
            color: WALL_COLOR,
        });
    }

    let text = |text: String, x: f32, y: f32| DrawCommand::Text {
        text,
        x,
        y,
        color: TEXT_COLOR,
        font: FONT,
    };
    commands.push(text(format!("Score: {}", session.score), 10.0, 30.0));
    commands.push(text(
        format!("High Score: {}", session.high_score.best()),
        10.0,
        70.0,
    ));
    if session.is_game_over() {
        commands.push(text(GAME_OVER_TEXT.to_string(), 150.0, 200.0));
    }

    commands
}

/// Emit the current frame to a renderer
pub fn draw_frame<R: RandomSource>(session: &Session<R>, renderer: &mut impl Renderer) {
    for command in frame_commands(session) {
        renderer.draw(&command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedRandom, GamePhase, Obstacle};
    use crate::tuning::Tuning;

    fn session() -> Session<FixedRandom> {
        Session::with_rng(Tuning::default(), FixedRandom(0.5))
    }

    #[test]
    fn test_frame_layout() {
        let mut s = session();
        s.obstacles.push(Obstacle {
            id: 1,
            x: 500.0,
            width: 150.0,
            gap_y: 100.0,
            gap_height: 250.0,
            tier: 0,
            speed: 5.0,
            oscillation: 0.0,
            marked_for_removal: false,
        });
        let commands = frame_commands(&s);
        assert_eq!(commands.len(), 2 + 3 + 2);
        assert!(matches!(commands[0], DrawCommand::Clear { .. }));
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(100.0, 50.0, 70.0, 70.0),
                color: PLAYER_COLOR
            }
        );
        assert_eq!(
            commands[4],
            DrawCommand::FillRect {
                rect: Rect::new(500.0, 350.0, 150.0, 370.0),
                color: WALL_COLOR
            }
        );
    }

    #[test]
    fn test_game_over_prompt() {
        let mut s = session();
        let mut r = RecordingRenderer::new();
        draw_frame(&s, &mut r);
        assert_eq!(r.texts(), vec!["Score: 0", "High Score: 0"]);

        s.phase = GamePhase::GameOver;
        r.clear();
        draw_frame(&s, &mut r);
        assert_eq!(r.texts(), vec!["Score: 0", "High Score: 0", GAME_OVER_TEXT]);
    }
}
