// src/analysis/resume.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of analyzing one resume. Exactly one of these is live at a time;
/// re-running an analysis replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub file_name: String,
    pub analyzed_at: DateTime<Utc>,
    /// Overall resume score, 0 to 100.
    pub score: u8,
    pub missing_skills: Vec<String>,
    pub career_paths: Vec<String>,
    pub roadmap: Vec<Milestone>,
}

/// One step of the learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub resources: Vec<String>,
    /// Whether the milestone starts out checked when the dashboard opens.
    pub completed_by_default: bool,
}

/// Qualitative band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::NeedsWork);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(ScoreBand::Excellent.label(), "Excellent");
        assert_eq!(ScoreBand::Good.label(), "Good");
        assert_eq!(ScoreBand::NeedsWork.label(), "Needs Work");
    }
}
