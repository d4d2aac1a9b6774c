//! Parser for `/usr/bin/time --verbose` reports.

use super::{ParseOutcome, field_after, format_seconds};
use crate::error::MalformedInput;
use crate::record::MeasurementRecord;

const EXIT_STATUS: &str = "Exit status: ";
const USER_TIME: &str = "User time (seconds): ";
const SYSTEM_TIME: &str = "System time (seconds): ";
const ELAPSED: &str = "Elapsed (wall clock) time (h:mm:ss or m:ss): ";
const CPU_PCT: &str = "Percent of CPU this job got: ";

/// Non-zero exit status gets the warning class.
pub fn row_class(record: &MeasurementRecord) -> &'static str {
    if record.get("exit_status") == Some("0") {
        ""
    } else {
        "warning"
    }
}

/// Extract a timing measurement from one verbose report.
///
/// A missing anchor or unparseable token leaves that field at its
/// placeholder and the record invalid; everything found is still populated
/// so the caller can render a best-effort row.
pub fn parse_report(blob: &str, source: &str) -> ParseOutcome {
    let mut record = MeasurementRecord::new(row_class);
    record.declare("exit_status", "-1");
    record.declare("user_time_sec", "");
    record.declare("system_time_sec", "");
    record.declare("elapsed_time_sec", "");
    record.declare("cpu_pct", "");

    let mut problems = Vec::new();

    match field_after(blob, EXIT_STATUS) {
        Ok(token) => match token.parse::<i64>() {
            Ok(status) => {
                if status != 0 {
                    // Expected occasionally; never aborts the parse.
                    log::warn!("non-zero exit status {status} in {source}");
                }
                record.add_field("exit_status", token);
            }
            Err(_) => problems.push(bad_number("exit_status", token)),
        },
        Err(problem) => problems.push(problem),
    }

    for (field, anchor) in [("user_time_sec", USER_TIME), ("system_time_sec", SYSTEM_TIME)] {
        match field_after(blob, anchor) {
            Ok(token) if token.parse::<f64>().is_ok() => record.add_field(field, token),
            Ok(token) => problems.push(bad_number(field, token)),
            Err(problem) => problems.push(problem),
        }
    }

    match field_after(blob, ELAPSED) {
        Ok(token) => match normalize_elapsed(token) {
            Ok(seconds) => record.add_field("elapsed_time_sec", format_seconds(seconds)),
            Err(problem) => problems.push(problem),
        },
        Err(problem) => problems.push(problem),
    }

    match field_after(blob, CPU_PCT) {
        Ok(token) => {
            let token = token.trim_end_matches('%');
            if token.parse::<i64>().is_ok() {
                record.add_field("cpu_pct", token);
            } else {
                problems.push(bad_number("cpu_pct", token));
            }
        }
        Err(problem) => problems.push(problem),
    }

    ParseOutcome::finish(record, source, problems)
}

fn bad_number(field: &str, token: &str) -> MalformedInput {
    MalformedInput::BadNumber {
        field: field.to_string(),
        token: token.to_string(),
    }
}

/// `m:ss` or `h:mm:ss` (seconds may be fractional) to total seconds.
fn normalize_elapsed(value: &str) -> Result<f64, MalformedInput> {
    let shape = || MalformedInput::ElapsedShape(value.to_string());
    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [m, s] => {
            let minutes: u64 = m.trim().parse().map_err(|_| shape())?;
            let seconds: f64 = s.trim().parse().map_err(|_| shape())?;
            Ok(minutes as f64 * 60.0 + seconds)
        }
        [h, m, s] => {
            let hours: u64 = h.trim().parse().map_err(|_| shape())?;
            let minutes: u64 = m.trim().parse().map_err(|_| shape())?;
            let seconds: f64 = s.trim().parse().map_err(|_| shape())?;
            Ok((hours * 3600 + minutes * 60) as f64 + seconds)
        }
        _ => Err(shape()),
    }
}
