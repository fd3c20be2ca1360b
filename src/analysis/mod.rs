// src/analysis/mod.rs
pub mod analyzer;
pub mod resume;

// Re-export commonly used types
pub use analyzer::{MockAnalyzer, ResumeAnalyzer};
pub use resume::{AnalysisResult, Milestone, ScoreBand};
