//! Parser for Spark stderr logs: per-stage durations and spill pressure.

use super::{ParseOutcome, format_seconds};
use crate::error::MalformedInput;
use crate::record::MeasurementRecord;

use regex::Regex;
use std::sync::LazyLock;

const STAGE_FINISHED: &str = "finished in ";
const STAGE_UNIT: &str = " s\n";

// Any mention of spilling counts, however the line is phrased. Coarse on
// purpose: the log has no formally delimited spill events.
static SPILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)spill").expect("static regex"));

/// A record that spilled at all gets the warning class.
pub fn row_class(record: &MeasurementRecord) -> &'static str {
    if record.get("spill_count") == Some("0") {
        ""
    } else {
        "warning"
    }
}

/// Extract stage timings and the spill count from one stderr log.
///
/// The stage count is discovered from the text, so the expected field count
/// is declared only after counting `"finished in "` occurrences.
pub fn parse_report(blob: &str, source: &str) -> ParseOutcome {
    let chunks: Vec<&str> = blob.split(STAGE_FINISHED).skip(1).collect();
    let stage_count = chunks.len();

    let mut record = MeasurementRecord::new(row_class);
    record.declare("spill_count", "-1");
    for i in 0..stage_count {
        record.declare(format!("stage {i} [sec]"), "");
    }
    record.declare("total time [sec]", "");

    let mut problems = Vec::new();
    let mut total = 0.0f64;
    let mut all_stages_parsed = true;

    for (i, chunk) in chunks.iter().copied().enumerate() {
        let field = format!("stage {i} [sec]");
        let token = match chunk.find(STAGE_UNIT) {
            Some(at) => &chunk[..at],
            None => chunk,
        };
        match token.parse::<f64>() {
            Ok(seconds) => {
                total += seconds;
                record.add_field(&field, token);
            }
            Err(_) => {
                all_stages_parsed = false;
                problems.push(MalformedInput::BadNumber {
                    field,
                    // token may run to end of file; keep the diagnostic short
                    token: token.lines().next().unwrap_or("").to_string(),
                });
            }
        }
    }

    if all_stages_parsed {
        record.add_field("total time [sec]", format_seconds(total));
    }

    record.add_field("spill_count", SPILL.find_iter(blob).count().to_string());

    ParseOutcome::finish(record, source, problems)
}
