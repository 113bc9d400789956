//! Records and record sets.

use super::Value;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// One decoded row: column name to value, in header order.
///
/// Columns whose cell was empty are absent rather than stored as blanks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, keeping the position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a value by column name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check whether the record has a value for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Column names present in this record, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of non-empty fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// An ordered sequence of records sharing one column schema.
///
/// Column order is the order in which keys are first seen, scanning the
/// records front to back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record set, collecting column names from the records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for record in &records {
            for key in record.keys() {
                if seen.insert(key) {
                    columns.push(key.to_string());
                }
            }
        }
        Self { columns, records }
    }

    /// Column names in first-seen order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Check whether any record carries `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The records, in original row order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return a new set where every record gains (or overwrites) `name`,
    /// computed from the record by `f`.
    pub fn generate_column<F>(&self, name: &str, f: F) -> RecordSet
    where
        F: Fn(&Record) -> Value,
    {
        let records = self
            .records
            .iter()
            .map(|record| {
                let mut next = record.clone();
                next.insert(name, f(record));
                next
            })
            .collect();
        RecordSet::from_records(records)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_insert_keeps_position() {
        let mut record = Record::new().with("Name", "Ann").with("Age", 25.0);
        record.insert("Name", "Bo");
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["Name", "Age"]);
        assert_eq!(record.get("Name"), Some(&Value::from("Bo")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_columns_first_seen_order() {
        let set = RecordSet::from_records(vec![
            Record::new().with("Name", "Ann"),
            Record::new().with("Name", "Bo").with("Age", 31.0),
            Record::new().with("City", "Oslo").with("Name", "Cy"),
        ]);
        assert_eq!(set.column_names(), &["Name", "Age", "City"]);
        assert!(set.has_column("City"));
        assert!(!set.has_column("Zip"));
    }

    #[test]
    fn test_generate_column_is_functional() {
        let set = RecordSet::from_records(vec![Record::new().with("n", 2.0)]);
        let doubled = set.generate_column("twice", |r| {
            Value::Number(r.get("n").and_then(Value::as_number).unwrap_or(0.0) * 2.0)
        });

        assert_eq!(set.column_names(), &["n"]);
        assert_eq!(doubled.column_names(), &["n", "twice"]);
        assert_eq!(doubled.records()[0].get("twice"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn test_serialize_in_column_order() {
        let set = RecordSet::from_records(vec![Record::new().with("Name", "Ann").with("Age", 25.0)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"Name":"Ann","Age":25}]"#);
    }
}
