// book.rs - The Stopped/Running state machine behind the window
//
// Scheduling is an explicit deadline: the UI polls every frame and asks egui
// to repaint when the deadline comes. Stopping clears the deadline, so a
// stopped book never fires again.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::alphabet::Alphabet;
use crate::config::{BookConfig, FormInput, TickSettings};
use crate::error::Result;
use crate::grid::{Grid, resample};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running { due: Instant },   // Pending tick; dropped on stop
}

pub struct RandomBook<R: Rng = StdRng> {
    grid: Grid,
    alphabet: Alphabet,
    rendered: String,           // Text currently on screen
    state: RunState,
    ticks: u64,
    rng: R,
}

impl RandomBook<StdRng> {
    /// Default-sized book seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(&BookConfig::default(), StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomBook<R> {
    pub fn new(config: &BookConfig, mut rng: R) -> Self {
        let grid = Grid::random(config.rows, config.cols, &config.alphabet, &mut rng);
        let rendered = grid.render();
        Self {
            grid,
            alphabet: config.alphabet.clone(),
            rendered,
            state: RunState::Stopped,
            ticks: 0,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn text(&self) -> &str {
        &self.rendered
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    /// Ticks fired since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// When the next tick is due, if running.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            RunState::Running { due } => Some(due),
            RunState::Stopped => None,
        }
    }

    /// Stopped -> Running. Validation failures leave the book stopped and
    /// untouched. Starting a running book does nothing.
    pub fn start(&mut self, form: &FormInput, now: Instant) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }

        let config = BookConfig::from_form(form).inspect_err(|err| {
            warn!(%err, "start rejected");
        })?;

        self.rebuild(&config);
        self.ticks = 0;
        info!(
            rows = config.rows,
            cols = config.cols,
            interval_ms = config.interval.as_millis() as u64,
            "started"
        );

        // First tick runs immediately
        self.fire(
            now,
            TickSettings {
                interval: config.interval,
                alphabet: config.alphabet,
            },
        );
        Ok(())
    }

    /// Running -> Stopped, cancelling the pending tick. Returns whether
    /// anything was running.
    pub fn stop(&mut self) -> bool {
        if let RunState::Running { .. } = self.state {
            self.state = RunState::Stopped;
            info!(ticks = self.ticks, "stopped");
            true
        } else {
            false
        }
    }

    /// One-shot regeneration from the current form. Ignored while running.
    pub fn generate_once(&mut self, form: &FormInput) -> Result<()> {
        if self.is_running() {
            debug!("generate ignored while running");
            return Ok(());
        }

        let config = BookConfig::from_form_clamped(form).inspect_err(|err| {
            warn!(%err, "generate rejected");
        })?;
        self.rebuild(&config);
        debug!(rows = config.rows, cols = config.cols, "generated");
        Ok(())
    }

    /// Drives the tick loop. Fires if the deadline has passed, re-reading the
    /// interval and extra characters from `form` leniently, and returns the
    /// next deadline. `None` when stopped.
    pub fn poll(&mut self, now: Instant, form: &FormInput) -> Option<Instant> {
        match self.state {
            RunState::Stopped => None,
            RunState::Running { due } if now >= due => {
                self.fire(now, TickSettings::from_form(form));
                self.deadline()
            }
            RunState::Running { due } => Some(due),
        }
    }

    fn rebuild(&mut self, config: &BookConfig) {
        self.grid = Grid::random(config.rows, config.cols, &config.alphabet, &mut self.rng);
        self.alphabet = config.alphabet.clone();
        self.rendered = self.grid.render();
    }

    fn fire(&mut self, now: Instant, settings: TickSettings) {
        resample(&mut self.grid, &settings.alphabet, &mut self.rng);
        self.alphabet = settings.alphabet;
        self.rendered = self.grid.render();
        self.ticks += 1;
        self.state = RunState::Running {
            due: now + settings.interval,
        };
        debug!(tick = self.ticks, next_ms = settings.interval.as_millis() as u64, "tick");
    }
}
