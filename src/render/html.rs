//! HTML `<tr>` fragment rendering, embeddable in a larger `<table>`.

use crate::record::MeasurementRecord;

/// One `<tr>` of `<th>` cells. `fields` defaults to the record's own order.
pub fn header(record: &MeasurementRecord, fields: Option<&[&str]>) -> String {
    let names = match fields {
        Some(names) => names.to_vec(),
        None => record.fields(),
    };
    let mut out = String::from("<tr>\n");
    for name in names {
        out.push_str("<th>");
        out.push_str(name);
        out.push_str("</th>\n");
    }
    out.push_str("</tr>\n");
    out
}

/// One `<tr class="...">` of `<td>` cells, in the same field order as the
/// paired header. With no explicit `row_class` the record's own predicate
/// decides between `"warning"` and `""`.
pub fn row(record: &MeasurementRecord, fields: Option<&[&str]>, row_class: Option<&str>) -> String {
    let names = match fields {
        Some(names) => names.to_vec(),
        None => record.fields(),
    };
    let class = match row_class {
        Some(class) => class,
        None => record.row_class(),
    };
    let mut out = format!("<tr class=\"{class}\">\n");
    for name in names {
        out.push_str("<td>");
        out.push_str(super::lookup(record, name));
        out.push_str("</td>\n");
    }
    out.push_str("</tr>\n");
    out
}
