// src/state/dashboard_state.rs
use std::collections::HashSet;

use crate::analysis::Milestone;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardTab {
    Roadmap,
    Skills,
    Careers,
    Advisor,
}

/// Per-visit dashboard state: the selected tab and which roadmap milestones
/// are checked off. Built fresh for each analysis result, so completion
/// marks never leak across runs.
#[derive(Debug)]
pub struct DashboardState {
    pub tab: DashboardTab,
    completed: HashSet<usize>,
    milestone_count: usize,
}

impl DashboardState {
    pub fn for_roadmap(roadmap: &[Milestone]) -> Self {
        let completed = roadmap
            .iter()
            .enumerate()
            .filter(|(_, milestone)| milestone.completed_by_default)
            .map(|(index, _)| index)
            .collect();
        Self {
            tab: DashboardTab::Roadmap,
            completed,
            milestone_count: roadmap.len(),
        }
    }

    /// Flips the completion mark of one milestone. The index comes from
    /// enumerating the roadmap this state was built for; anything else is a
    /// bug in the caller.
    pub fn toggle(&mut self, index: usize) {
        assert!(
            index < self.milestone_count,
            "milestone index {} out of range ({} milestones)",
            index,
            self.milestone_count
        );
        if !self.completed.remove(&index) {
            self.completed.insert(index);
        }
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn milestone_count(&self) -> usize {
        self.milestone_count
    }

    /// Share of milestones completed, 0.0 to 100.0. An empty roadmap counts
    /// as 0% complete.
    pub fn completion_percentage(&self) -> f32 {
        if self.milestone_count == 0 {
            return 0.0;
        }
        self.completed.len() as f32 / self.milestone_count as f32 * 100.0
    }
}
