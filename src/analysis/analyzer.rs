// src/analysis/analyzer.rs
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::resume::{AnalysisResult, Milestone};
use crate::errors::AnalysisError;
use crate::file::UploadedFile;

/// Produces an analysis result for an uploaded resume. The controller only
/// talks to this trait, so a real backend can replace the mock without any
/// flow changes. Latency is simulated by the caller, not here.
pub trait ResumeAnalyzer {
    fn analyze(&self, file: &UploadedFile) -> Result<AnalysisResult, AnalysisError>;
}

/// Canned analyzer used while no scoring backend exists. Returns the same
/// score and roadmap for every input, tagged with the submitted file name.
#[derive(Debug, Default)]
pub struct MockAnalyzer;

impl ResumeAnalyzer for MockAnalyzer {
    fn analyze(&self, file: &UploadedFile) -> Result<AnalysisResult, AnalysisError> {
        debug!("Running mock analysis for {}", file.name);
        Ok(AnalysisResult {
            id: Uuid::new_v4().to_string(),
            file_name: file.name.clone(),
            analyzed_at: Utc::now(),
            score: 78,
            missing_skills: strings(&["React", "TypeScript", "Node.js", "Python", "SQL", "AWS"]),
            career_paths: strings(&[
                "Frontend Developer",
                "Full Stack Developer",
                "Software Engineer",
                "Product Manager",
            ]),
            roadmap: mock_roadmap(),
        })
    }
}

fn mock_roadmap() -> Vec<Milestone> {
    vec![
        milestone(
            "Master React Fundamentals",
            "Learn components, hooks, and state management",
            &["React Official Docs", "Frontend Masters Course", "Build 3 Projects"],
        ),
        milestone(
            "Learn TypeScript",
            "Add type safety to your JavaScript projects",
            &["TypeScript Handbook", "Practice Exercises", "Convert a JS Project"],
        ),
        milestone(
            "Backend Development with Node.js",
            "Build REST APIs and server-side applications",
            &["Node.js Course", "Express.js Tutorial", "Build an API"],
        ),
        milestone(
            "Database Design & SQL",
            "Master relational databases and queries",
            &["SQL Tutorial", "Database Design Course", "Practice Problems"],
        ),
        milestone(
            "Cloud Services (AWS)",
            "Deploy and scale applications in the cloud",
            &["AWS Fundamentals", "Deploy Projects", "Get Certified"],
        ),
    ]
}

fn milestone(title: &str, description: &str, resources: &[&str]) -> Milestone {
    Milestone {
        title: title.to_string(),
        description: description.to_string(),
        resources: strings(resources),
        completed_by_default: false,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
