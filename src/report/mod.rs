//! System report model and reporters.
//!
//! Each reporter produces an [`InfoRecord`] (ordered label/value pairs) and
//! never fails: anything that goes wrong during collection is folded into a
//! placeholder value. A [`SystemReport`] bundles the three records for one
//! page render or terminal print; nothing is cached between collections.

pub mod cpu;
pub mod gpu;
pub mod os;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single labeled display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

/// An ordered label -> value mapping produced by one reporter.
///
/// Labels are unique within a record: pushing an existing label replaces its
/// value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoRecord {
    entries: Vec<InfoEntry>,
}

impl InfoRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a labeled value, or replace the value if the label exists.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.label == label) {
            entry.value = value;
        } else {
            self.entries.push(InfoEntry { label, value });
        }
    }

    /// Look up a value by label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InfoEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Complete report: one record per reporter, plus the collection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemReport {
    pub os: InfoRecord,
    pub cpu: InfoRecord,
    pub gpu: InfoRecord,
    pub generated_at: DateTime<Utc>,
}

impl SystemReport {
    /// Run all reporters. Blocks while the GPU tools execute.
    pub fn collect() -> Self {
        SystemReport {
            os: os::collect(),
            cpu: cpu::collect(),
            gpu: gpu::collect(),
            generated_at: Utc::now(),
        }
    }

    /// Sections in display order as (title, record) pairs.
    pub fn sections(&self) -> [(&'static str, &InfoRecord); 3] {
        [
            ("Operating System", &self.os),
            ("CPU Information", &self.cpu),
            ("GPU Information", &self.gpu),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut record = InfoRecord::new();
        record.push("System", "Linux");
        record.push("Release", "6.8");
        record.push("Hostname", "box");

        let labels: Vec<&str> = record.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["System", "Release", "Hostname"]);
    }

    #[test]
    fn push_replaces_existing_label_in_place() {
        let mut record = InfoRecord::new();
        record.push("System", "Linux");
        record.push("Release", "6.8");
        record.push("System", "FreeBSD");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("System"), Some("FreeBSD"));
        let labels: Vec<&str> = record.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["System", "Release"]);
    }

    #[test]
    fn record_serializes_as_ordered_entry_array() {
        let mut record = InfoRecord::new();
        record.push("System", "Linux");
        record.push("Hostname", "box");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"label": "System", "value": "Linux"},
                {"label": "Hostname", "value": "box"},
            ])
        );
    }

    #[test]
    fn collect_produces_all_three_sections() {
        let report = SystemReport::collect();
        assert!(!report.os.is_empty());
        assert!(!report.cpu.is_empty());
        assert!(!report.gpu.is_empty());
    }
}
