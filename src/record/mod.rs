//! Ordered field-value record shared by every parser.
//!
//! Insertion order is significant: it decides column order in rendering.
//! Each entry remembers whether a parser actually populated it or whether it
//! still holds its construction-time placeholder, which is what validity
//! tracking is built on.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Decides the HTML row class for a record kind (`"warning"` or `""`).
///
/// Attached per record at construction so new record kinds bring their own
/// predicate instead of branching inside the renderer.
pub type RowClassFn = fn(&MeasurementRecord) -> &'static str;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: String,
    populated: bool,
}

/// Insertion-ordered field map with completeness tracking.
///
/// A record is *valid* iff the number of populated entries equals the
/// expected count declared via [`MeasurementRecord::declare`] (plus any
/// fields added later with [`MeasurementRecord::add_field`]). A declared
/// entry left at its placeholder keeps the record invalid, which is how a
/// parser signals that an anchor was absent from the source text.
#[derive(Debug, Clone)]
pub struct MeasurementRecord {
    entries: Vec<Entry>,
    expected: usize,
    row_class: RowClassFn,
}

impl MeasurementRecord {
    pub fn new(row_class: RowClassFn) -> Self {
        Self {
            entries: Vec::new(),
            expected: 0,
            row_class,
        }
    }

    /// Declare a field up front with a placeholder value.
    ///
    /// The field counts toward the expected total but is not populated
    /// until [`MeasurementRecord::add_field`] overwrites it. Names must be
    /// unique per record.
    pub fn declare(&mut self, name: impl Into<String>, placeholder: impl Into<String>) {
        self.entries.push(Entry {
            name: name.into(),
            value: placeholder.into(),
            populated: false,
        });
        self.expected += 1;
    }

    /// Insert or overwrite a field.
    ///
    /// Overwriting a declared entry marks it populated; a previously-unknown
    /// name appends a populated entry and raises the expected count with it,
    /// so extending a finished record keeps it valid.
    pub fn add_field(&mut self, name: &str, value: impl Into<String>) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.value = value.into();
                entry.populated = true;
            }
            None => {
                self.entries.push(Entry {
                    name: name.to_string(),
                    value: value.into(),
                    populated: true,
                });
                self.expected += 1;
            }
        }
    }

    /// Visible field names in insertion order.
    ///
    /// Names starting with `_` are implementation-private and never appear
    /// in any rendered output.
    pub fn fields(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.name.starts_with('_'))
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Current value of a field (placeholder or populated).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    /// True when every expected field has been populated.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().filter(|e| e.populated).count() == self.expected
    }

    /// Row class per the attached predicate.
    pub fn row_class(&self) -> &'static str {
        (self.row_class)(self)
    }
}

/// Serializes as an ordered map of visible fields, matching column order.
impl Serialize for MeasurementRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let visible: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| !e.name.starts_with('_'))
            .collect();
        let mut map = serializer.serialize_map(Some(visible.len()))?;
        for entry in visible {
            map.serialize_entry(&entry.name, &entry.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(_: &MeasurementRecord) -> &'static str {
        ""
    }

    fn always_warn(_: &MeasurementRecord) -> &'static str {
        "warning"
    }

    #[test]
    fn declared_fields_keep_insertion_order() {
        let mut r = MeasurementRecord::new(plain);
        r.declare("b", "");
        r.declare("a", "");
        r.declare("c", "");
        assert_eq!(r.fields(), vec!["b", "a", "c"]);
    }

    #[test]
    fn declared_but_unpopulated_record_is_invalid() {
        let mut r = MeasurementRecord::new(plain);
        r.declare("x", "-1");
        r.declare("y", "");
        assert!(!r.is_valid());
        assert_eq!(r.get("x"), Some("-1"));

        r.add_field("x", "0");
        assert!(!r.is_valid());
        r.add_field("y", "1.5");
        assert!(r.is_valid());
    }

    #[test]
    fn adding_a_fresh_field_keeps_a_valid_record_valid() {
        let mut r = MeasurementRecord::new(plain);
        r.declare("x", "");
        r.add_field("x", "1");
        assert!(r.is_valid());

        r.add_field("extra", "2");
        assert!(r.is_valid());
        assert_eq!(r.fields(), vec!["x", "extra"]);
    }

    #[test]
    fn overwriting_does_not_grow_the_record() {
        let mut r = MeasurementRecord::new(plain);
        r.add_field("x", "1");
        r.add_field("x", "2");
        assert_eq!(r.fields(), vec!["x"]);
        assert_eq!(r.get("x"), Some("2"));
        assert!(r.is_valid());
    }

    #[test]
    fn private_fields_never_show_up() {
        let mut r = MeasurementRecord::new(plain);
        r.add_field("x", "1");
        r.add_field("_note", "internal");
        assert_eq!(r.fields(), vec!["x"]);
        assert_eq!(r.get("_note"), Some("internal"));
        assert!(r.is_valid());

        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"x":"1"}"#);
    }

    #[test]
    fn row_class_comes_from_the_attached_predicate() {
        let r = MeasurementRecord::new(always_warn);
        assert_eq!(r.row_class(), "warning");
        let r = MeasurementRecord::new(plain);
        assert_eq!(r.row_class(), "");
    }

    #[test]
    fn json_preserves_field_order() {
        let mut r = MeasurementRecord::new(plain);
        r.add_field("zeta", "1");
        r.add_field("alpha", "2");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2"}"#);
    }
}
