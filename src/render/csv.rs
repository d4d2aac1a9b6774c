//! CSV header/row rendering.

use crate::record::MeasurementRecord;

/// Comma-joined field names in record order.
pub fn header(record: &MeasurementRecord) -> String {
    record.fields().join(",")
}

/// Comma-joined field values in record order, newline-terminated.
pub fn row(record: &MeasurementRecord) -> String {
    let values: Vec<&str> = record
        .fields()
        .into_iter()
        .map(|field| super::lookup(record, field))
        .collect();
    let mut out = values.join(",");
    out.push('\n');
    out
}
