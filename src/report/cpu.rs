//! CPU core-count reporter.
//!
//! Deliberately unimplemented upstream: the original page shipped fixed
//! placeholders instead of core counts, and downstream consumers key off the
//! exact placeholder text. Keep it verbatim until real counts are in scope.

use super::InfoRecord;

pub const PHYSICAL_CORES_LABEL: &str = "CPU Cores (Physical)";
pub const LOGICAL_CORES_LABEL: &str = "CPU Cores (Logical)";

pub const CORE_COUNT_PLACEHOLDER: &str = "N/A (requires psutil)";

/// Collect the CPU record. Always the same two placeholder entries.
pub fn collect() -> InfoRecord {
    let mut record = InfoRecord::new();
    record.push(PHYSICAL_CORES_LABEL, CORE_COUNT_PLACEHOLDER);
    record.push(LOGICAL_CORES_LABEL, CORE_COUNT_PLACEHOLDER);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_exactly_the_two_placeholders() {
        let record = collect();
        assert_eq!(record.len(), 2);
        assert_eq!(
            record.get(PHYSICAL_CORES_LABEL),
            Some(CORE_COUNT_PLACEHOLDER)
        );
        assert_eq!(
            record.get(LOGICAL_CORES_LABEL),
            Some(CORE_COUNT_PLACEHOLDER)
        );
    }
}
