//! Logical input actions with press/hold edge detection
//!
//! A held jump key must not re-trigger every tick: the jump latch only
//! re-arms on release.

use crate::sim::TickInput;

/// Logical actions the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Restart,
}

impl Action {
    /// Map a `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(Action::Jump),
            "Enter" => Some(Action::Restart),
            _ => None,
        }
    }
}

/// Pending actions plus the re-arm latch
#[derive(Debug, Clone)]
pub struct InputState {
    jump_pending: bool,
    /// False while the jump source is held down
    jump_armed: bool,
    restart_pending: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump_pending: false,
            jump_armed: true,
            restart_pending: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source went down. Jump only queues if the latch is armed.
    pub fn press(&mut self, action: Action) {
        match action {
            Action::Jump => {
                if self.jump_armed && !self.jump_pending {
                    self.jump_pending = true;
                    self.jump_armed = false;
                }
            }
            Action::Restart => self.restart_pending = true,
        }
    }

    /// Source went up
    pub fn release(&mut self, action: Action) {
        if action == Action::Jump {
            self.jump_armed = true;
        }
    }

    /// Touch start: restart when the run is over, otherwise jump
    pub fn touch_start(&mut self, game_over: bool) {
        if game_over {
            self.press(Action::Restart);
        } else {
            self.press(Action::Jump);
        }
    }

    pub fn touch_end(&mut self) {
        self.release(Action::Jump);
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Consume the pending jump
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pending)
    }

    /// Consume the pending restart
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_pending)
    }

    /// Build this tick's input, consuming the jump
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            jump: self.take_jump(),
        }
    }

    /// Drop anything queued (on restart). The latch state is kept so a
    /// key still held down cannot fire.
    pub fn clear_pending(&mut self) {
        self.jump_pending = false;
        self.restart_pending = false;
    }
}
