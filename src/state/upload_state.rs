// src/state/upload_state.rs
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::{ProgressIncrement, UploadSettings};
use crate::errors::{TransferError, ValidationError};
use crate::file::{UploadedFile, MIME_DOCX, MIME_PDF, MIME_TXT};
use crate::timing::{Delay, Ticker};

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const ACCEPTED_MIME_TYPES: [&str; 3] = [MIME_PDF, MIME_DOCX, MIME_TXT];

/// Both checks run on every submission; the type check wins when a file
/// fails both.
pub fn validate(file: &UploadedFile) -> Result<(), ValidationError> {
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedType(file.mime_type.clone()));
    }
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            size_bytes: file.size_bytes,
            limit_bytes: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadPhase {
    /// Waiting for a file; also the state after a rejection or failure.
    Idle,
    /// Simulated transfer in progress.
    Transferring,
    /// Transfer done; holding before (and during) analysis.
    Complete,
}

/// Events the controller reacts to. At most one is produced per poll.
#[derive(Debug, PartialEq)]
pub enum UploadEvent {
    /// Transfer reached 100%.
    Completed,
    /// Handoff hold elapsed; the file is ready for analysis.
    HandoffReady(UploadedFile),
    /// Simulated transfer failed; the state has been reset to Idle.
    Failed(TransferError),
}

/// Simulated resume transfer. Progress rises by random increments on a fixed
/// tick, visibly capped until the configured latency elapses, then jumps to
/// exactly 100. Failure on either path resets to Idle with all timers
/// released, so the screen is immediately retryable.
#[derive(Debug)]
pub struct UploadState {
    phase: UploadPhase,
    progress: f32,
    ticker: Option<Ticker>,
    latency: Option<Delay>,
    handoff: Option<Delay>,
    file: Option<UploadedFile>,
    file_name: Option<String>,
    rng: StdRng,
    increment: ProgressIncrement,
    in_flight_cap: f32,
    tick_period: Duration,
    latency_after: Duration,
    handoff_after: Duration,
    sim_outcome: Result<(), TransferError>,
}

impl UploadState {
    pub fn new(settings: &UploadSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            phase: UploadPhase::Idle,
            progress: 0.0,
            ticker: None,
            latency: None,
            handoff: None,
            file: None,
            file_name: None,
            rng,
            increment: settings.increment,
            // Progress must not show complete before the latency elapses
            in_flight_cap: settings.in_flight_cap.clamp(0.0, 99.0),
            tick_period: settings.tick(),
            latency_after: settings.latency(),
            handoff_after: settings.handoff(),
            sim_outcome: Ok(()),
        }
    }

    /// Validates the file and, if accepted, starts the simulated transfer.
    /// A rejection leaves the state exactly as it was. Submissions while a
    /// transfer is already in flight are ignored.
    pub fn submit(&mut self, file: UploadedFile, now: Instant) -> Result<(), ValidationError> {
        if self.phase != UploadPhase::Idle {
            debug!("Ignoring submission of {} while an upload is in flight", file.name);
            return Ok(());
        }
        validate(&file)?;

        debug!("Starting simulated transfer for {} ({} bytes)", file.name, file.size_bytes);
        self.phase = UploadPhase::Transferring;
        self.progress = 0.0;
        self.ticker = Some(Ticker::new(self.tick_period, now));
        self.latency = Some(Delay::new(self.latency_after, now));
        self.file_name = Some(file.name.clone());
        self.file = Some(file);
        Ok(())
    }

    pub fn poll(&mut self, now: Instant) -> Option<UploadEvent> {
        match self.phase {
            UploadPhase::Idle => None,
            UploadPhase::Transferring => self.poll_transfer(now),
            UploadPhase::Complete => self.poll_handoff(now),
        }
    }

    fn poll_transfer(&mut self, now: Instant) -> Option<UploadEvent> {
        let mut ticks = 0;
        if let Some(ticker) = self.ticker.as_mut() {
            ticks = ticker.poll(now);
        }
        for _ in 0..ticks {
            let step = self.increment.sample(&mut self.rng);
            self.progress = (self.progress + step).min(self.in_flight_cap);
        }

        let latency_elapsed = self.latency.map_or(false, |delay| delay.is_elapsed(now));
        if !latency_elapsed {
            return None;
        }

        // Terminal for the transfer either way; release its timers
        self.ticker = None;
        self.latency = None;
        match std::mem::replace(&mut self.sim_outcome, Ok(())) {
            Ok(()) => {
                self.progress = 100.0;
                self.phase = UploadPhase::Complete;
                self.handoff = Some(Delay::new(self.handoff_after, now));
                Some(UploadEvent::Completed)
            }
            Err(err) => {
                self.reset();
                Some(UploadEvent::Failed(err))
            }
        }
    }

    fn poll_handoff(&mut self, now: Instant) -> Option<UploadEvent> {
        let ready = self.handoff.map_or(false, |delay| delay.is_elapsed(now));
        if !ready {
            return None;
        }
        self.handoff = None;
        self.file.take().map(UploadEvent::HandoffReady)
    }

    /// Back to a clean, retryable Idle with every timer released. Also used
    /// by the controller when a later analysis fails.
    pub fn reset(&mut self) {
        self.phase = UploadPhase::Idle;
        self.progress = 0.0;
        self.ticker = None;
        self.latency = None;
        self.handoff = None;
        self.file = None;
        self.file_name = None;
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whole percentage for display.
    pub fn display_percent(&self) -> u32 {
        self.progress.round() as u32
    }

    /// Name of the submitted file. Unlike the file itself, this survives the
    /// handoff so the completed card can keep showing it.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let mut next: Option<Instant> = None;
        let mut consider = |candidate: Instant| {
            next = Some(match next {
                Some(existing) => existing.min(candidate),
                None => candidate,
            });
        };
        if let Some(ticker) = &self.ticker {
            consider(ticker.next_due());
        }
        if let Some(latency) = &self.latency {
            consider(latency.due());
        }
        if let Some(handoff) = &self.handoff {
            consider(handoff.due());
        }
        next
    }

    #[cfg(test)]
    pub(crate) fn fail_next_transfer(&mut self, err: TransferError) {
        self.sim_outcome = Err(err);
    }
}
