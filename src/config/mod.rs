// src/config/mod.rs
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pacing settings for the whole flow. Loaded from an optional RON file so
/// the simulated timings can be tuned without a rebuild; every field has a
/// default matching the shipped behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub splash: SplashSettings,
    pub upload: UploadSettings,
    pub analysis: AnalysisSettings,
    pub toast: ToastSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            splash: SplashSettings::default(),
            upload: UploadSettings::default(),
            analysis: AnalysisSettings::default(),
            toast: ToastSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashSettings {
    /// Milliseconds between progress steps.
    pub tick_ms: u64,
    /// Percent added per step.
    pub step: u8,
    /// Hold time after reaching 100% before leaving the splash screen.
    pub linger_ms: u64,
}

impl Default for SplashSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            step: 2,
            linger_ms: 300,
        }
    }
}

impl SplashSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn linger(&self) -> Duration {
        Duration::from_millis(self.linger_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Milliseconds between simulated progress increments.
    pub tick_ms: u64,
    /// Simulated network latency before the transfer completes.
    pub latency_ms: u64,
    /// Hold time on the completed card before analysis starts.
    pub handoff_ms: u64,
    /// Displayed progress is held at this value until the latency elapses.
    pub in_flight_cap: f32,
    /// Per-tick progress increment policy.
    pub increment: ProgressIncrement,
    /// Fixed RNG seed for the increment samples. None seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            latency_ms: 2000,
            handoff_ms: 1000,
            in_flight_cap: 95.0,
            increment: ProgressIncrement::default(),
            seed: None,
        }
    }
}

impl UploadSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn handoff(&self) -> Duration {
        Duration::from_millis(self.handoff_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Simulated analysis latency before the dashboard is shown.
    pub latency_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self { latency_ms: 3000 }
    }
}

impl AnalysisSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    /// How long a notification stays on screen.
    pub ttl_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self { ttl_ms: 4000 }
    }
}

impl ToastSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

/// How much simulated progress each upload tick adds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProgressIncrement {
    Fixed { step: f32 },
    Uniform { min: f32, max: f32 },
}

impl Default for ProgressIncrement {
    fn default() -> Self {
        ProgressIncrement::Uniform {
            min: 0.0,
            max: 15.0,
        }
    }
}

impl ProgressIncrement {
    pub fn sample(&self, rng: &mut StdRng) -> f32 {
        match *self {
            ProgressIncrement::Fixed { step } => step,
            ProgressIncrement::Uniform { min, max } => {
                if max <= min {
                    return min;
                }
                Uniform::new(min, max).sample(rng)
            }
        }
    }
}

/// Location of the settings file, if a config directory exists on this
/// platform.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("career-compass").join("settings.ron"))
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }

    /// Loads settings from the platform config directory. A missing file is
    /// normal and yields the defaults; an unreadable or unparsable file is
    /// logged and ignored.
    pub fn load_or_default() -> Self {
        let path = match settings_path() {
            Some(path) => path,
            None => return Self::default(),
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_default_pacing() {
        let settings = Settings::default();
        assert_eq!(settings.splash.tick(), Duration::from_millis(50));
        assert_eq!(settings.splash.step, 2);
        assert_eq!(settings.upload.latency(), Duration::from_millis(2000));
        assert_eq!(settings.upload.in_flight_cap, 95.0);
        assert_eq!(settings.analysis.latency(), Duration::from_millis(3000));
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings.upload.seed = Some(7);
        settings.upload.increment = ProgressIncrement::Fixed { step: 10.0 };

        let text = ron::ser::to_string_pretty(&settings, ron::ser::PrettyConfig::default())
            .expect("serialize settings");
        let parsed: Settings = ron::from_str(&text).expect("parse settings");
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_settings_file_fills_defaults() {
        let parsed: Settings =
            ron::from_str("(splash: (tick_ms: 10))").expect("parse partial settings");
        assert_eq!(parsed.splash.tick_ms, 10);
        assert_eq!(parsed.splash.step, 2);
        assert_eq!(parsed.upload, UploadSettings::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.ron");
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, "(analysis: (latency_ms: 1))").expect("write settings");

        let settings = Settings::load_from(&path).expect("load settings");
        assert_eq!(settings.analysis.latency_ms, 1);
    }

    #[test]
    fn test_fixed_increment_ignores_rng() {
        let mut rng = StdRng::seed_from_u64(1);
        let increment = ProgressIncrement::Fixed { step: 10.0 };
        assert_eq!(increment.sample(&mut rng), 10.0);
        assert_eq!(increment.sample(&mut rng), 10.0);
    }

    #[test]
    fn test_uniform_increment_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let increment = ProgressIncrement::Uniform { min: 0.0, max: 15.0 };
        for _ in 0..100 {
            let sample = increment.sample(&mut rng);
            assert!((0.0..15.0).contains(&sample));
        }
    }

    #[test]
    fn test_degenerate_uniform_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let increment = ProgressIncrement::Uniform { min: 5.0, max: 5.0 };
        assert_eq!(increment.sample(&mut rng), 5.0);
    }

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let increment = ProgressIncrement::default();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(increment.sample(&mut a), increment.sample(&mut b));
        }
    }
}
