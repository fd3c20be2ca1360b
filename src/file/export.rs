// src/file/export.rs
use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

use crate::analysis::Milestone;
use crate::state::DashboardState;

/// Writes the roadmap with the current completion marks as CSV, one row per
/// milestone in roadmap order.
pub fn write_roadmap_csv(
    path: &Path,
    roadmap: &[Milestone],
    dashboard: &DashboardState,
) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["milestone", "description", "resources", "completed"])?;
    for (index, milestone) in roadmap.iter().enumerate() {
        let resources = milestone.resources.join("; ");
        writer.write_record([
            milestone.title.as_str(),
            milestone.description.as_str(),
            resources.as_str(),
            if dashboard.is_completed(index) { "yes" } else { "no" },
        ])?;
    }
    writer.flush().context("Failed to write roadmap CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roadmap() -> Vec<Milestone> {
        vec![
            Milestone {
                title: "Learn TypeScript".to_string(),
                description: "Add type safety".to_string(),
                resources: vec!["Handbook".to_string(), "Exercises".to_string()],
                completed_by_default: false,
            },
            Milestone {
                title: "Database Design".to_string(),
                description: "Master relational databases".to_string(),
                resources: vec!["SQL Tutorial".to_string()],
                completed_by_default: false,
            },
        ]
    }

    #[test]
    fn test_export_writes_one_row_per_milestone() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("roadmap.csv");

        let milestones = roadmap();
        let mut dashboard = DashboardState::for_roadmap(&milestones);
        dashboard.toggle(1);

        write_roadmap_csv(&path, &milestones, &dashboard).expect("export succeeds");

        let mut reader = csv::Reader::from_path(&path).expect("open exported file");
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.expect("valid row")).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "Learn TypeScript");
        assert_eq!(&rows[0][2], "Handbook; Exercises");
        assert_eq!(&rows[0][3], "no");
        assert_eq!(&rows[1][0], "Database Design");
        assert_eq!(&rows[1][3], "yes");
    }

    #[test]
    fn test_export_empty_roadmap_writes_header_only() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("roadmap.csv");

        let dashboard = DashboardState::for_roadmap(&[]);
        write_roadmap_csv(&path, &[], &dashboard).expect("export succeeds");

        let mut reader = csv::Reader::from_path(&path).expect("open exported file");
        assert_eq!(
            reader.headers().expect("headers").iter().collect::<Vec<_>>(),
            vec!["milestone", "description", "resources", "completed"]
        );
        assert_eq!(reader.records().count(), 0);
    }
}
