use chrono::DateTime;
use colored::Colorize;

use leasefile_core::{LeaseRecord, MalformedTimestamp};

use crate::stats::LeaseStats;

/// Render full lease blocks for terminal output, one field per line.
pub fn render_text(records: &[LeaseRecord]) -> String {
    let mut out = Vec::new();

    for record in records {
        out.push(format!("lease {}", record.address.bold()));
        for (label, value) in time_fields(record) {
            if let Some(epoch) = value {
                out.push(format!("  {label}: {}", format_epoch(epoch)));
            }
        }
        if let Some(state) = &record.binding_state {
            out.push(format!("  binding state: {}", paint_state(state)));
        }
        if let Some(next) = &record.next_binding_state {
            out.push(format!("  next binding state: {next}"));
        }
        if let Some(rewind) = &record.rewind_binding_state {
            out.push(format!("  rewind binding state: {rewind}"));
        }
        if let Some(hardware) = &record.hardware {
            out.push(format!("  hardware: {hardware}"));
        }
        if let Some(hostname) = &record.client_hostname {
            out.push(format!("  client-hostname: {hostname}"));
        }
        out.push(String::new());
    }

    out.join("\n")
}

/// Render one line per lease.
pub fn render_summary(records: &[LeaseRecord]) -> String {
    let mut out = Vec::new();

    for record in records {
        let mut line = format!("- {}", record.address);
        if let Some(state) = &record.binding_state {
            line.push_str(&format!(" state={}", paint_state(state)));
        }
        if let Some(hardware) = &record.hardware {
            line.push_str(&format!(" mac={hardware}"));
        }
        if let Some(hostname) = &record.client_hostname {
            line.push_str(&format!(" host={hostname}"));
        }
        if let Some(ends) = record.ends {
            line.push_str(&format!(" ends={}", format_epoch(ends)));
        }
        out.push(line);
    }

    out.join("\n")
}

/// Render malformed-timestamp anomalies as warning lines for stderr.
pub fn render_warnings(entries: &[MalformedTimestamp]) -> String {
    let mut out = Vec::new();

    for entry in entries {
        out.push(format!(
            "warning: lease {}: unparseable {} time {:?}",
            entry.address, entry.keyword, entry.value
        ));
    }

    out.join("\n")
}

/// Render aggregate counts.
pub fn render_stats(stats: &LeaseStats) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "leases={} unique_addresses={} malformed_timestamps={}",
        stats.leases, stats.unique_addresses, stats.malformed_timestamps
    ));
    out.push("binding_states".to_string());
    if stats.by_binding_state.is_empty() {
        out.push("- none".to_string());
    } else {
        for (state, count) in &stats.by_binding_state {
            out.push(format!("- {}: {count}", paint_state(state)));
        }
    }

    out.join("\n")
}

fn time_fields(record: &LeaseRecord) -> [(&'static str, Option<i64>); 6] {
    [
        ("starts", record.starts),
        ("ends", record.ends),
        ("tstp", record.tstp),
        ("cltt", record.cltt),
        ("tsfp", record.tsfp),
        ("atsfp", record.atsfp),
    ]
}

/// Epoch seconds as calendar text, with the raw value alongside.
fn format_epoch(epoch: i64) -> String {
    match DateTime::from_timestamp(epoch, 0) {
        Some(time) => format!("{} ({epoch})", time.format("%Y/%m/%d %H:%M:%S")),
        None => epoch.to_string(),
    }
}

fn paint_state(state: &str) -> String {
    match state {
        "active" => state.green().to_string(),
        "free" | "backup" => state.cyan().to_string(),
        "abandoned" => state.red().to_string(),
        "expired" | "released" => state.yellow().to_string(),
        _ => state.to_string(),
    }
}
