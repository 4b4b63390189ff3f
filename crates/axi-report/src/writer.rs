//! Accumulates a run's snapshots and writes them to disk.

use std::fs;
use std::path::Path;

use axi_solver::Snapshot;

use crate::table::format_snapshot;
use crate::ReportResult;

/// Collects header lines and snapshots, then writes a text report
/// and/or a JSONL record file in one go.
#[derive(Default)]
pub struct SolutionWriter {
    header: Vec<String>,
    snapshots: Vec<Snapshot>,
}

impl SolutionWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line to the case header block at the top of the text report.
    pub fn header_line(&mut self, line: impl Into<String>) {
        self.header.push(line.into());
    }

    pub fn push(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn write_text(&self, path: &Path) -> ReportResult<()> {
        let mut content = String::new();
        for line in &self.header {
            content.push_str(line);
            content.push('\n');
        }
        if !self.header.is_empty() {
            content.push('\n');
        }
        for snapshot in &self.snapshots {
            content.push_str(&format_snapshot(snapshot));
            content.push('\n');
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// One JSON document per snapshot, one per line.
    pub fn write_jsonl(&self, path: &Path) -> ReportResult<()> {
        let mut content = String::new();
        for snapshot in &self.snapshots {
            let line = serde_json::to_string(snapshot)?;
            content.push_str(&line);
            content.push('\n');
        }
        fs::write(path, content)?;
        Ok(())
    }
}
