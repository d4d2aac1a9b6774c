//! Tabular rendering over a finished record.
//!
//! Pure functions: nothing here mutates a record. Header and row calls must
//! be paired with the same field order and subset, or columns misalign;
//! that pairing is the caller's contract.

pub mod csv;
pub mod html;

use crate::record::MeasurementRecord;

/// Value of a caller-specified field.
///
/// A name the record does not carry is a caller bug, not input noise, so
/// this fails loudly instead of recovering.
fn lookup<'r>(record: &'r MeasurementRecord, field: &str) -> &'r str {
    match record.get(field) {
        Some(value) => value,
        None => panic!("record has no field {field:?}; header and row field lists must match the record"),
    }
}
