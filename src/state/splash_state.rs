// src/state/splash_state.rs
use std::time::{Duration, Instant};

use crate::config::SplashSettings;
use crate::timing::{Delay, Ticker};

/// Status lines shown under the splash progress bar, keyed by the progress
/// percentage at which each one takes over.
const STATUS_LINES: [(u8, &str); 4] = [
    (0, "Initializing Career Compass..."),
    (25, "Loading smart features..."),
    (50, "Preparing career insights..."),
    (75, "Almost ready..."),
];

/// Drives the splash progress bar from 0 to exactly 100 on a fixed cadence,
/// then holds for a short linger before reporting completion exactly once.
///
/// The ticker is released the moment progress reaches 100, so no further
/// step can fire. All state changes happen inside `poll`; entering the
/// splash screen again means constructing a fresh `SplashState`.
#[derive(Debug)]
pub struct SplashState {
    progress: u8,
    step: u8,
    ticker: Option<Ticker>,
    linger: Option<Delay>,
    linger_after: Duration,
    finished: bool,
}

impl SplashState {
    pub fn new(settings: &SplashSettings, now: Instant) -> Self {
        Self {
            progress: 0,
            step: settings.step.max(1),
            ticker: Some(Ticker::new(settings.tick(), now)),
            linger: None,
            linger_after: settings.linger(),
            finished: false,
        }
    }

    /// Advances the driver. Returns true exactly once, on the poll where the
    /// splash has finished and the flow should move on.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }

        let mut ticks = 0;
        if let Some(ticker) = self.ticker.as_mut() {
            ticks = ticker.poll(now);
        }
        for _ in 0..ticks {
            self.progress = self.progress.saturating_add(self.step).min(100);
            if self.progress == 100 {
                self.ticker = None;
                self.linger = Some(Delay::new(self.linger_after, now));
                break;
            }
        }

        let linger_elapsed = self.linger.map_or(false, |delay| delay.is_elapsed(now));
        if linger_elapsed {
            self.finished = true;
            self.linger = None;
            return true;
        }
        false
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn status_line(&self) -> &'static str {
        let mut line = STATUS_LINES[0].1;
        for (threshold, text) in STATUS_LINES {
            if self.progress >= threshold {
                line = text;
            }
        }
        line
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (&self.ticker, &self.linger) {
            (Some(ticker), _) => Some(ticker.next_due()),
            (None, Some(linger)) => Some(linger.due()),
            (None, None) => None,
        }
    }
}
