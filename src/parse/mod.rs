//! Anchor-based parsers for the supported log families.
//!
//! Both parsers work on one in-memory text blob the caller already read,
//! own their record for the whole parse pass, and never let a malformed
//! input escape as an error: problems are aggregated into the returned
//! [`ParseOutcome`].

pub mod spark;
pub mod time;

use crate::error::{MalformedInput, ParseFailure};
use crate::record::MeasurementRecord;

/// What a parse pass hands back: the (possibly partial) record plus the
/// aggregated failure, if any. Callers decide how to surface the failure.
#[derive(Debug)]
pub struct ParseOutcome {
    pub record: MeasurementRecord,
    pub failure: Option<ParseFailure>,
}

impl ParseOutcome {
    fn finish(record: MeasurementRecord, source: &str, problems: Vec<MalformedInput>) -> Self {
        let failure = if problems.is_empty() && record.is_valid() {
            None
        } else {
            Some(ParseFailure {
                source: source.to_string(),
                problems,
            })
        };
        Self { record, failure }
    }
}

/// The token following the first occurrence of `anchor`, up to the next
/// line break, trimmed.
fn field_after<'a>(blob: &'a str, anchor: &'static str) -> Result<&'a str, MalformedInput> {
    let (_, rest) = blob
        .split_once(anchor)
        .ok_or(MalformedInput::MissingAnchor(anchor))?;
    Ok(rest.lines().next().unwrap_or("").trim())
}

/// Seconds formatted the way the source reports print them: integral totals
/// keep one decimal digit, fractional totals print shortest-exact.
fn format_seconds(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_after_reads_to_end_of_line() {
        let blob = "junk\nExit status: 3\nmore";
        assert_eq!(field_after(blob, "Exit status: ").unwrap(), "3");
    }

    #[test]
    fn field_after_reports_the_missing_anchor() {
        let err = field_after("nothing here", "Exit status: ").unwrap_err();
        assert_eq!(err, MalformedInput::MissingAnchor("Exit status: "));
    }

    #[test]
    fn seconds_formatting() {
        assert_eq!(format_seconds(9.0), "9.0");
        assert_eq!(format_seconds(0.0), "0.0");
        assert_eq!(format_seconds(65.5), "65.5");
        assert_eq!(format_seconds(3723.25), "3723.25");
    }
}
