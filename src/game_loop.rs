//! Frame-driven game loop
//!
//! One opaque [`GameLoop::frame`] call per display callback. The loop stops
//! asking for callbacks when the run ends and is re-entered by a restart.

use rand_pcg::Pcg32;

use crate::platform::{Action, FrameClock, InputState};
use crate::renderer::{self, Renderer};
use crate::sim::{GameEvent, RandomSource, Session};
use crate::tuning::Tuning;

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Session plus the input and clock that feed it
#[derive(Debug, Clone)]
pub struct GameLoop<R: RandomSource = Pcg32> {
    pub session: Session<R>,
    pub input: InputState,
    pub clock: FrameClock,
    running: bool,
}

impl GameLoop<Pcg32> {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::from_session(Session::new(tuning, seed))
    }
}

impl<R: RandomSource> GameLoop<R> {
    pub fn from_session(session: Session<R>) -> Self {
        Self {
            running: !session.is_game_over(),
            session,
            input: InputState::new(),
            clock: FrameClock::new(),
        }
    }

    /// True while frames should keep being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    pub fn touch_start(&mut self) {
        self.input.touch_start(self.session.is_game_over());
    }

    pub fn touch_end(&mut self) {
        self.input.touch_end();
    }

    /// Run one frame at `timestamp` (ms) and draw it
    pub fn frame(
        &mut self,
        timestamp: f64,
        renderer: &mut impl Renderer,
    ) -> (LoopControl, Vec<GameEvent>) {
        let dt = self.clock.tick(timestamp);
        let events = if self.running {
            let input = self.input.take_tick_input();
            self.session.tick(&input, dt)
        } else {
            Vec::new()
        };

        renderer::draw_frame(&self.session, renderer);

        if self.session.is_game_over() {
            self.running = false;
            return (LoopControl::Stop, events);
        }
        (LoopControl::Continue, events)
    }

    /// Apply a pending restart. Only honoured once the run is over; returns
    /// true when the driver should start scheduling frames again.
    pub fn poll_restart(&mut self) -> bool {
        if !self.input.take_restart() || !self.session.is_game_over() {
            return false;
        }
        self.session.restart();
        self.input.clear_pending();
        self.clock.reset();
        self.running = true;
        true
    }
}
