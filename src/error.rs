//! Parse-time error types.
//!
//! Malformed input is recovered: the parser collects every problem it hits,
//! leaves the record partial, and hands back one aggregated [`ParseFailure`]
//! for the caller to log. Contrast with caller contract violations in the
//! renderer, which panic instead of returning an error.

use std::fmt;
use thiserror::Error;

/// One malformed-input condition found while scanning a log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("anchor {0:?} not found")]
    MissingAnchor(&'static str),

    #[error("{field}: {token:?} is not a number")]
    BadNumber { field: String, token: String },

    #[error("elapsed time {0:?} is not m:ss or h:mm:ss")]
    ElapsedShape(String),
}

/// Everything that went wrong while parsing one source, as a single
/// one-line report naming that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub source: String,
    pub problems: Vec<MalformedInput>,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "problem parsing {}: ", self.source)?;
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn failure_display_is_a_single_line() {
        let failure = ParseFailure {
            source: "run7.time".to_string(),
            problems: vec![
                MalformedInput::MissingAnchor("Exit status: "),
                MalformedInput::BadNumber {
                    field: "cpu_pct".to_string(),
                    token: "?\nmore".to_string(),
                },
            ],
        };
        let line = failure.to_string();
        assert!(!line.contains('\n'), "diagnostic must stay one line: {line:?}");
        assert_eq!(
            line,
            "problem parsing run7.time: anchor \"Exit status: \" not found; \
             cpu_pct: \"?\\nmore\" is not a number"
        );
    }
}
