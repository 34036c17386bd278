//! Operating system metadata reporter.
//!
//! Thin pass-through over the platform accessors exposed by sysinfo. The
//! record always carries all six keys: a missing hostname becomes "N/A" and
//! any other missing accessor value becomes "Unknown"; nothing here fails.

use sysinfo::System;

use super::InfoRecord;

pub const HOSTNAME_LABEL: &str = "Hostname";

const HOSTNAME_FALLBACK: &str = "N/A";
const UNKNOWN: &str = "Unknown";

/// Raw accessor values, split out so the record assembly is testable without
/// touching the live platform.
pub(crate) struct OsFacts {
    pub system: Option<String>,
    pub release: Option<String>,
    pub version: Option<String>,
    pub machine: String,
    pub processor: Option<String>,
    pub hostname: Option<String>,
}

impl OsFacts {
    fn gather() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        let processor = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        OsFacts {
            system: System::name(),
            release: System::kernel_version(),
            version: System::os_version(),
            machine: std::env::consts::ARCH.to_string(),
            processor,
            hostname: System::host_name(),
        }
    }
}

pub(crate) fn record_from(facts: OsFacts) -> InfoRecord {
    let mut record = InfoRecord::new();
    record.push("System", facts.system.unwrap_or_else(|| UNKNOWN.to_string()));
    record.push(
        "Release",
        facts.release.unwrap_or_else(|| UNKNOWN.to_string()),
    );
    record.push(
        "Version",
        facts.version.unwrap_or_else(|| UNKNOWN.to_string()),
    );
    record.push("Machine", facts.machine);
    record.push(
        "Processor",
        facts.processor.unwrap_or_else(|| UNKNOWN.to_string()),
    );
    record.push(
        HOSTNAME_LABEL,
        facts
            .hostname
            .unwrap_or_else(|| HOSTNAME_FALLBACK.to_string()),
    );
    record
}

/// Collect the OS record from the live platform.
pub fn collect() -> InfoRecord {
    record_from(OsFacts::gather())
}
