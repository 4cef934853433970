//! Outer game loop
//!
//! Polls input, handles session commands, runs fixed simulation ticks from
//! the frame delta and hands the result to the draw pass.

use crate::Tuning;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::platform::time::MAX_FRAME_DT;
use crate::platform::{FrameClock, InputSource, SessionCommand};
use crate::renderer::{Canvas, draw};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding the session and its collaborators
pub struct App<I: InputSource, C: Canvas> {
    pub state: GameState,
    pub input: I,
    pub canvas: C,
    tuning: Tuning,
    accumulator: f32,
    frames: u64,
    running: bool,
    sessions: u32,
    best_score: u64,
}

impl<I: InputSource, C: Canvas> App<I, C> {
    pub fn new(seed: u64, tuning: Tuning, input: I, canvas: C) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning.clone()),
            input,
            canvas,
            tuning,
            accumulator: 0.0,
            frames: 0,
            running: true,
            sessions: 1,
            best_score: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sessions started so far, including the current one
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Highest score reached in any session of this run
    pub fn best_score(&self) -> u64 {
        self.best_score.max(self.state.score)
    }

    /// Process one rendered frame. Returns false once the app should exit.
    pub fn frame(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }

        let input = self.input.poll(&self.state);
        for command in input.commands {
            match command {
                SessionCommand::Quit => {
                    log::info!("Quit after {} frames, best score {}", self.frames, self.best_score());
                    self.running = false;
                    return false;
                }
                SessionCommand::Restart if self.state.is_over() => self.restart(),
                SessionCommand::Restart => log::debug!("Restart ignored while playing"),
            }
        }

        let tick_input = TickInput::from_keys(input.keys);
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &tick_input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::GameOver { score } => {
                    self.best_score = self.best_score.max(score);
                }
                other => log::trace!("{:?}", other),
            }
        }

        draw(&self.state, &mut self.canvas);
        self.frames += 1;
        true
    }

    /// Run frames paced by `clock` until quit or `max_frames` is reached
    pub fn run(&mut self, clock: &mut FrameClock, max_frames: Option<u64>) {
        while self.running {
            if max_frames.is_some_and(|max| self.frames >= max) {
                log::info!("Frame limit reached");
                break;
            }
            let dt = clock.tick();
            self.frame(dt);
        }
    }

    /// Throw the finished session away and start a fresh one
    fn restart(&mut self) {
        self.best_score = self.best_score.max(self.state.score);
        let seed = self.state.seed.wrapping_add(1);
        self.state = GameState::with_tuning(seed, self.tuning.clone());
        self.accumulator = 0.0;
        self.sessions += 1;
        log::info!("Restarted (session {})", self.sessions);
    }
}
