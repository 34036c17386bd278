//! GPU detection via vendor command-line tools.
//!
//! A fixed-priority fallback chain: `nvidia-smi`, then `rocm-smi`, then a
//! static "nothing detected" message. A tier is skipped when its tool is not
//! installed or exits non-zero; the first tier whose tool runs to completion
//! owns the result. No timeout is configured, so a hung tool blocks the
//! calling thread (kept to match the upstream behavior).

use std::io;
use std::process::Command;

use tracing::{debug, warn};

use super::InfoRecord;

pub const GPU_LABEL: &str = "GPU Information";

const NVIDIA_EMPTY_OUTPUT: &str = "NVIDIA GPU detected, but nvidia-smi output was empty.";
const AMD_OUTPUT_HEADER: &str = "AMD GPU detected (rocm-smi output needs parsing):";
const NO_GPU_DETECTED: &str =
    "No NVIDIA or AMD GPU detected via command line tools, or tools not installed.";

/// Outcome of probing one tool tier.
enum TierOutcome {
    /// The tool ran to completion; the rendered result text.
    Reported(String),
    /// Tool missing or exited non-zero; fall through to the next tier.
    Unavailable,
}

/// One external command in the fallback chain.
pub(crate) struct ToolTier {
    program: String,
    args: Vec<String>,
    render: fn(&str) -> String,
}

impl ToolTier {
    pub(crate) fn new(
        program: impl Into<String>,
        args: &[&str],
        render: fn(&str) -> String,
    ) -> Self {
        ToolTier {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            render,
        }
    }
}

fn render_nvidia(output: &str) -> String {
    if output.is_empty() {
        NVIDIA_EMPTY_OUTPUT.to_string()
    } else {
        output.to_string()
    }
}

fn render_amd(output: &str) -> String {
    format!("{AMD_OUTPUT_HEADER}\n{output}")
}

fn nvidia_tier() -> ToolTier {
    ToolTier::new(
        "nvidia-smi",
        &[
            "--query-gpu=name,driver_version,memory.total",
            "--format=csv,noheader",
        ],
        render_nvidia,
    )
}

fn amd_tier() -> ToolTier {
    ToolTier::new(
        "rocm-smi",
        &["--showproductname", "--showdriverversion", "--showmeminfo", "vram"],
        render_amd,
    )
}

/// Run one tier. Only unexpected spawn failures (anything other than
/// "executable not found") surface as errors.
fn probe(tier: &ToolTier) -> io::Result<TierOutcome> {
    debug!(program = %tier.program, "probing GPU tool");
    let output = match Command::new(&tier.program).args(&tier.args).output() {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(program = %tier.program, "tool not installed");
            return Ok(TierOutcome::Unavailable);
        }
        Err(err) => return Err(err),
    };

    if !output.status.success() {
        debug!(program = %tier.program, status = %output.status, "tool exited non-zero");
        return Ok(TierOutcome::Unavailable);
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(TierOutcome::Reported((tier.render)(&text)))
}

/// Combine tiers left to right: first completed tool wins, exhausting the
/// chain yields the static default.
fn first_report(tiers: &[ToolTier]) -> io::Result<String> {
    for tier in tiers {
        if let TierOutcome::Reported(text) = probe(tier)? {
            return Ok(text);
        }
    }
    Ok(NO_GPU_DETECTED.to_string())
}

pub(crate) fn detect_with(tiers: &[ToolTier]) -> String {
    match first_report(tiers) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, "GPU probe failed unexpectedly");
            format!("Error getting GPU info: {err}")
        }
    }
}

/// Collect the GPU record. Never fails; degrades to placeholder text.
pub fn collect() -> InfoRecord {
    let mut record = InfoRecord::new();
    record.push(GPU_LABEL, detect_with(&[nvidia_tier(), amd_tier()]));
    record
}
