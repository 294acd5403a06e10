use std::time::Instant;

use crate::models::MemorySnapshot;

/// Whole seconds elapsed since `started_at`
pub fn uptime_secs(started_at: Instant) -> u64 {
    started_at.elapsed().as_secs()
}

/// Reads the current memory usage of this process
///
/// Only Linux exposes `/proc/self/status`; elsewhere every field is unknown.
pub fn memory_snapshot() -> MemorySnapshot {
    match std::fs::read_to_string("/proc/self/status") {
        Ok(status) => parse_proc_status(&status),
        Err(e) => {
            tracing::debug!(error = %e, "Process memory stats unavailable");
            MemorySnapshot::default()
        }
    }
}

fn parse_proc_status(status: &str) -> MemorySnapshot {
    let mut snapshot = MemorySnapshot::default();

    for line in status.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let field = match key {
            "VmRSS" => &mut snapshot.rss,
            "VmHWM" => &mut snapshot.rss_peak,
            "VmSize" => &mut snapshot.virtual_size,
            "VmData" => &mut snapshot.data,
            _ => continue,
        };
        *field = parse_kib(value);
    }

    snapshot
}

/// Parses a procfs size such as "  12345 kB" into bytes
fn parse_kib(value: &str) -> Option<u64> {
    let mut parts = value.split_whitespace();
    let amount: u64 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some("kB") => amount.checked_mul(1024),
        None => Some(amount),
        Some(_) => None,
    }
}
