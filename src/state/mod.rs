// src/state/mod.rs
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::analysis::{AnalysisResult, MockAnalyzer, ResumeAnalyzer};
use crate::config::Settings;
use crate::file::UploadedFile;
use crate::timing::Delay;

pub mod dashboard_state;
pub mod splash_state;
pub mod toast_state;
pub mod upload_state;

pub use dashboard_state::{DashboardState, DashboardTab};
pub use splash_state::SplashState;
pub use toast_state::{Toast, ToastKind, Toasts};
pub use upload_state::{UploadEvent, UploadPhase, UploadState};

// Screen tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Splash,
    Landing,
    Upload,
    Dashboard,
}

/// An analysis request that has been accepted but whose simulated latency
/// has not elapsed yet. Dropped with the state that owns it, which also
/// cancels the pending screen transition.
struct PendingAnalysis {
    file: UploadedFile,
    ready: Delay,
}

/// Core application state. Owns the current screen, the single live
/// analysis result, and the per-screen drivers; it is the only place
/// screen transitions happen. All time-dependent behavior runs through
/// `poll`, which takes the current instant instead of reading the clock.
pub struct AppState {
    pub settings: Settings,

    // Flow
    pub current_screen: Screen,
    pub analysis: Option<AnalysisResult>,

    // Per-screen state
    pub splash: SplashState,
    pub upload: UploadState,
    pub dashboard: DashboardState,
    pub toasts: Toasts,

    // Services
    analyzer: Box<dyn ResumeAnalyzer>,
    pending_analysis: Option<PendingAnalysis>,
}

impl AppState {
    pub fn new(settings: Settings, now: Instant) -> Self {
        Self {
            current_screen: Screen::Splash,
            analysis: None,
            splash: SplashState::new(&settings.splash, now),
            upload: UploadState::new(&settings.upload),
            dashboard: DashboardState::for_roadmap(&[]),
            toasts: Toasts::new(settings.toast.ttl()),
            analyzer: Box::new(MockAnalyzer),
            pending_analysis: None,
            settings,
        }
    }

    /// Advances every active timer to `now` and applies whatever became due.
    /// Called once per frame by the shell and directly by tests.
    pub fn poll(&mut self, now: Instant) {
        self.toasts.prune(now);
        match self.current_screen {
            Screen::Splash => {
                if self.splash.poll(now) {
                    self.advance_from_splash();
                }
            }
            Screen::Landing => {}
            Screen::Upload => {
                if let Some(event) = self.upload.poll(now) {
                    self.handle_upload_event(event, now);
                }
                self.poll_pending_analysis(now);
            }
            Screen::Dashboard => {}
        }
    }

    pub fn advance_from_splash(&mut self) {
        if self.current_screen != Screen::Splash {
            warn!("Ignoring splash completion outside the splash screen");
            return;
        }
        info!("Entering landing screen");
        self.current_screen = Screen::Landing;
    }

    /// The landing page's primary call to action.
    pub fn advance_from_landing(&mut self) {
        if self.current_screen != Screen::Landing {
            warn!("Ignoring get-started outside the landing screen");
            return;
        }
        info!("Entering upload screen");
        // Entering the screen restarts the upload flow from scratch
        self.upload = UploadState::new(&self.settings.upload);
        self.current_screen = Screen::Upload;
    }

    /// Submits a candidate resume file. Rejections surface as a destructive
    /// notification and leave the upload state untouched.
    pub fn submit_upload(&mut self, file: UploadedFile, now: Instant) {
        if self.current_screen != Screen::Upload {
            warn!("Ignoring file submission outside the upload screen");
            return;
        }
        if let Err(err) = self.upload.submit(file, now) {
            warn!("Rejected upload: {err}");
            let (title, description) = err.user_message();
            self.toasts.notify(now, title, description, ToastKind::Destructive);
        }
    }

    /// Schedules analysis of an uploaded file. The result lands after the
    /// configured latency, via `poll`.
    pub fn start_analysis(&mut self, file: UploadedFile, now: Instant) {
        debug_assert!(
            self.current_screen == Screen::Upload,
            "analysis requested outside the upload flow"
        );
        debug_assert!(self.analysis.is_none(), "analysis requested twice");
        if self.current_screen != Screen::Upload || self.analysis.is_some() {
            warn!("Ignoring analysis request outside the upload flow");
            return;
        }
        info!("Scheduling analysis for {}", file.name);
        self.pending_analysis = Some(PendingAnalysis {
            file,
            ready: Delay::new(self.settings.analysis.latency(), now),
        });
    }

    fn handle_upload_event(&mut self, event: UploadEvent, now: Instant) {
        match event {
            UploadEvent::Completed => {
                let name = self.upload.file_name().unwrap_or("Your resume").to_string();
                debug!("Transfer complete for {name}");
                self.toasts.notify(
                    now,
                    "Upload successful!",
                    format!("{name} has been uploaded successfully."),
                    ToastKind::Info,
                );
            }
            UploadEvent::HandoffReady(file) => self.start_analysis(file, now),
            UploadEvent::Failed(err) => {
                warn!("Upload failed: {err}");
                let (title, description) = err.user_message();
                self.toasts.notify(now, title, description, ToastKind::Destructive);
            }
        }
    }

    fn poll_pending_analysis(&mut self, now: Instant) {
        let due = match &self.pending_analysis {
            Some(pending) => pending.ready.is_elapsed(now),
            None => false,
        };
        if !due {
            return;
        }
        if let Some(pending) = self.pending_analysis.take() {
            match self.analyzer.analyze(&pending.file) {
                Ok(result) => {
                    info!(
                        "Analysis complete for {} (score {}, id {})",
                        result.file_name, result.score, result.id
                    );
                    self.dashboard = DashboardState::for_roadmap(&result.roadmap);
                    self.analysis = Some(result);
                    self.current_screen = Screen::Dashboard;
                }
                Err(err) => {
                    warn!("Analysis failed: {err}");
                    let (title, description) = err.user_message();
                    self.toasts.notify(now, title, description, ToastKind::Destructive);
                    // Back to a retryable upload screen
                    self.upload.reset();
                }
            }
        }
    }

    /// Earliest instant at which some timer becomes due, for scheduling the
    /// next repaint. None when nothing is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        let mut deadlines: Vec<Instant> = Vec::new();
        match self.current_screen {
            Screen::Splash => {
                if let Some(due) = self.splash.next_deadline() {
                    deadlines.push(due);
                }
            }
            Screen::Upload => {
                if let Some(due) = self.upload.next_deadline() {
                    deadlines.push(due);
                }
                if let Some(pending) = &self.pending_analysis {
                    deadlines.push(pending.ready.due());
                }
            }
            Screen::Landing | Screen::Dashboard => {}
        }
        if let Some(expiry) = self.toasts.next_expiry() {
            deadlines.push(expiry);
        }
        deadlines.into_iter().min()
    }

    #[cfg(test)]
    pub(crate) fn set_analyzer(&mut self, analyzer: Box<dyn ResumeAnalyzer>) {
        self.analyzer = analyzer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use crate::errors::TransferError;
    use crate::file::{MIME_PDF, MIME_TXT};
    use std::time::Duration;

    fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.upload.seed = Some(42);
        settings
    }

    fn new_state() -> (AppState, Instant) {
        let t0 = Instant::now();
        (AppState::new(test_settings(), t0), t0)
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn pdf(name: &str) -> UploadedFile {
        UploadedFile::new(name, 2 * 1024 * 1024, MIME_PDF)
    }

    /// Runs the state to the upload screen the way a user would.
    fn state_at_upload() -> (AppState, Instant) {
        let (mut state, t0) = new_state();
        state.poll(at(t0, 2500));
        state.poll(at(t0, 2800));
        assert_eq!(state.current_screen, Screen::Landing);
        state.advance_from_landing();
        (state, t0)
    }

    struct FailingAnalyzer;

    impl ResumeAnalyzer for FailingAnalyzer {
        fn analyze(&self, _file: &UploadedFile) -> Result<AnalysisResult, AnalysisError> {
            Err(AnalysisError::Backend("model unavailable".to_string()))
        }
    }

    #[test]
    fn test_starts_on_splash_with_no_result() {
        let (state, _) = new_state();
        assert_eq!(state.current_screen, Screen::Splash);
        assert!(state.analysis.is_none());
    }

    #[test]
    fn test_splash_runs_to_completion_then_lands() {
        let (mut state, t0) = new_state();

        state.poll(at(t0, 1000));
        assert_eq!(state.current_screen, Screen::Splash);
        assert_eq!(state.splash.progress(), 40);

        state.poll(at(t0, 2500));
        assert_eq!(state.splash.progress(), 100);
        assert_eq!(state.current_screen, Screen::Splash);

        // Linger elapses, then exactly one transition
        state.poll(at(t0, 2800));
        assert_eq!(state.current_screen, Screen::Landing);

        state.poll(at(t0, 10_000));
        assert_eq!(state.current_screen, Screen::Landing);
    }

    #[test]
    fn test_get_started_only_works_from_landing() {
        let (mut state, _) = new_state();
        state.advance_from_landing();
        assert_eq!(state.current_screen, Screen::Splash);
    }

    #[test]
    fn test_rejection_shows_toast_and_keeps_screen_idle() {
        let (mut state, t0) = state_at_upload();

        let bad = UploadedFile::new("archive.zip", 1024, "application/zip");
        state.submit_upload(bad, at(t0, 3000));

        assert_eq!(state.current_screen, Screen::Upload);
        assert_eq!(state.upload.phase(), UploadPhase::Idle);
        assert_eq!(state.upload.next_deadline(), None);

        let toast = state.toasts.iter().next().expect("rejection toast");
        assert_eq!(toast.title, "Invalid file type");
        assert_eq!(toast.kind, ToastKind::Destructive);
    }

    #[test]
    fn test_oversized_file_gets_distinct_toast() {
        let (mut state, t0) = state_at_upload();

        let big = UploadedFile::new("resume.txt", 11 * 1024 * 1024, MIME_TXT);
        state.submit_upload(big, at(t0, 3000));

        let toast = state.toasts.iter().next().expect("rejection toast");
        assert_eq!(toast.title, "File too large");
    }

    #[test]
    fn test_accepted_file_runs_through_to_dashboard() {
        let (mut state, t0) = state_at_upload();
        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);

        // During the transfer the displayed progress stays under the cap
        for ms in (200..2000).step_by(200) {
            state.poll(submit + Duration::from_millis(ms));
            assert!(state.upload.display_percent() <= 95);
            assert_eq!(state.current_screen, Screen::Upload);
        }

        // Latency elapses: exactly 100 plus a success notification
        state.poll(submit + Duration::from_millis(2000));
        assert_eq!(state.upload.progress(), 100.0);
        let toast = state.toasts.iter().next().expect("success toast");
        assert_eq!(toast.title, "Upload successful!");
        assert!(toast.description.contains("resume.pdf"));
        assert_eq!(toast.kind, ToastKind::Info);

        // Handoff hold, then the analysis is scheduled
        state.poll(submit + Duration::from_millis(3000));
        assert_eq!(state.current_screen, Screen::Upload);
        assert!(state.analysis.is_none());

        // Analysis latency elapses: single result, dashboard entered
        state.poll(submit + Duration::from_millis(5999));
        assert_eq!(state.current_screen, Screen::Upload);
        state.poll(submit + Duration::from_millis(6000));
        assert_eq!(state.current_screen, Screen::Dashboard);

        let result = state.analysis.as_ref().expect("analysis result");
        assert_eq!(result.file_name, "resume.pdf");
        assert_eq!(state.dashboard.milestone_count(), result.roadmap.len());
        assert_eq!(state.dashboard.completed_count(), 0);
    }

    #[test]
    fn test_transfer_failure_resets_and_notifies() {
        let (mut state, t0) = state_at_upload();
        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);
        state
            .upload
            .fail_next_transfer(TransferError::Interrupted("simulated".to_string()));

        state.poll(submit + Duration::from_millis(2000));

        assert_eq!(state.current_screen, Screen::Upload);
        assert_eq!(state.upload.phase(), UploadPhase::Idle);
        let toast = state.toasts.iter().next().expect("failure toast");
        assert_eq!(toast.title, "Upload failed");
        assert_eq!(toast.kind, ToastKind::Destructive);

        // Retry goes through
        state.submit_upload(pdf("retry.pdf"), submit + Duration::from_millis(2100));
        assert_eq!(state.upload.phase(), UploadPhase::Transferring);
    }

    #[test]
    fn test_analysis_failure_returns_to_retryable_upload() {
        let (mut state, t0) = state_at_upload();
        state.set_analyzer(Box::new(FailingAnalyzer));

        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);
        state.poll(submit + Duration::from_millis(2000));
        state.poll(submit + Duration::from_millis(3000));
        state.poll(submit + Duration::from_millis(6000));

        assert_eq!(state.current_screen, Screen::Upload);
        assert!(state.analysis.is_none());
        assert_eq!(state.upload.phase(), UploadPhase::Idle);
        assert!(state
            .toasts
            .iter()
            .any(|toast| toast.title == "Analysis failed"));

        state.submit_upload(pdf("retry.pdf"), submit + Duration::from_millis(6100));
        assert_eq!(state.upload.phase(), UploadPhase::Transferring);
    }

    #[test]
    fn test_dashboard_milestone_toggle_updates_percentage() {
        let (mut state, t0) = state_at_upload();
        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);
        state.poll(submit + Duration::from_millis(2000));
        state.poll(submit + Duration::from_millis(3000));
        state.poll(submit + Duration::from_millis(6000));
        assert_eq!(state.current_screen, Screen::Dashboard);

        state.dashboard.toggle(0);
        state.dashboard.toggle(2);
        assert_eq!(state.dashboard.completion_percentage(), 40.0);

        state.dashboard.toggle(0);
        assert_eq!(state.dashboard.completion_percentage(), 20.0);
    }

    #[test]
    fn test_replacing_state_cancels_pending_transition() {
        let (mut state, t0) = state_at_upload();
        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);
        state.poll(submit + Duration::from_millis(2000));
        state.poll(submit + Duration::from_millis(3000));

        // Analysis is pending; replacing the whole state drops its timer
        let mut replacement = AppState::new(test_settings(), submit + Duration::from_millis(3100));
        std::mem::swap(&mut state, &mut replacement);

        state.poll(submit + Duration::from_millis(60_000));
        assert_ne!(state.current_screen, Screen::Dashboard);
        assert!(state.analysis.is_none());
    }

    #[test]
    fn test_submissions_ignored_off_the_upload_screen() {
        let (mut state, t0) = new_state();
        state.submit_upload(pdf("resume.pdf"), at(t0, 10));
        assert!(state.toasts.is_empty());
        assert_eq!(state.upload.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_next_deadline_follows_the_active_screen() {
        let (mut state, t0) = new_state();
        // Splash ticks every 50ms
        assert_eq!(state.next_deadline(), Some(at(t0, 50)));

        state.poll(at(t0, 2500));
        state.poll(at(t0, 2800));
        assert_eq!(state.current_screen, Screen::Landing);
        assert_eq!(state.next_deadline(), None);

        state.advance_from_landing();
        let submit = at(t0, 3000);
        state.submit_upload(pdf("resume.pdf"), submit);
        assert_eq!(
            state.next_deadline(),
            Some(submit + Duration::from_millis(200))
        );
    }

    #[test]
    fn test_toast_deadline_counts_even_on_quiet_screens() {
        let (mut state, t0) = new_state();
        state.poll(at(t0, 2500));
        state.poll(at(t0, 2800));
        assert_eq!(state.current_screen, Screen::Landing);

        state
            .toasts
            .notify(at(t0, 3000), "note", "", ToastKind::Info);
        assert_eq!(state.next_deadline(), Some(at(t0, 7000)));

        state.poll(at(t0, 7000));
        assert!(state.toasts.is_empty());
        assert_eq!(state.next_deadline(), None);
    }
}
