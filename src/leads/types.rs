use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::error::{LeadError, Result};

/// A single cell of a lead dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Interpret a raw spreadsheet cell.
    ///
    /// Empty cells become `Null`, cells that parse as finite numbers become
    /// `Number`, everything else is kept verbatim as `Text`.
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return FieldValue::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => FieldValue::Number(n),
            _ => FieldValue::Text(cell.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Null, or text containing only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Number(n) => write!(f, "{}", format_number(*n)),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

/// Render whole numbers without a trailing ".0" (2000000 rather than 2000000.0)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("field '{field}' expected a {expected}, found {found} '{value}'")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
        value: String,
    },
}

/// One lead: a mapping from field name to value.
///
/// Lookups try the exact name first and then fall back to a case-insensitive
/// match on the trimmed name, so callers don't depend on header casing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        if let Some(value) = self.fields.get(name) {
            return Some(value);
        }
        let wanted = name.trim();
        self.fields
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(wanted))
            .map(|(_, value)| value)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text view of a field. Numbers are rendered as text; null or absent
    /// fields yield `None`.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(format_number(*n)),
        }
    }

    /// Numeric view of a field. Text values are a type mismatch; null or
    /// absent fields yield `Ok(None)`.
    pub fn number(&self, name: &str) -> std::result::Result<Option<f64>, FieldError> {
        match self.get(name) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Number(n)) => Ok(Some(*n)),
            Some(other @ FieldValue::Text(_)) => Err(FieldError::TypeMismatch {
                field: name.to_string(),
                expected: "number",
                found: other.kind(),
                value: other.to_string(),
            }),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// An ordered sequence of records sharing one column list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Build a dataset from a header and positional rows.
    ///
    /// Short rows are padded with nulls; a row with more values than the
    /// header is invalid. A header repeated verbatim keeps its first
    /// occurrence.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<FieldValue>>) -> Result<Self> {
        let mut columns: Vec<String> = Vec::with_capacity(header.len());
        let mut keep = Vec::with_capacity(header.len());
        for name in &header {
            if columns.contains(name) {
                tracing::warn!("Ignoring repeated column '{}'", name);
                keep.push(false);
            } else {
                columns.push(name.clone());
                keep.push(true);
            }
        }

        let mut dataset = Dataset::new(columns);
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() < header.len() {
                tracing::warn!(
                    "Row {} has {} of {} values; missing cells treated as empty",
                    i + 1,
                    row.len(),
                    header.len()
                );
                row.resize(header.len(), FieldValue::Null);
            }
            if row.len() > header.len() {
                return Err(LeadError::InvalidInput(format!(
                    "row {} has {} values but the header has {} columns",
                    i + 1,
                    row.len(),
                    header.len()
                )));
            }
            let record: Record = header
                .iter()
                .zip(keep.iter())
                .zip(row)
                .filter(|((_, keep), _)| **keep)
                .map(|((name, _), value)| (name.clone(), value))
                .collect();
            dataset.records.push(record);
        }
        Ok(dataset)
    }

    /// Build a dataset from records that may not share the same keys.
    /// Columns are the union of keys in first-seen order; gaps become null.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut dataset = Dataset::default();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    /// Append a record, keeping the field set uniform across all records.
    pub fn push(&mut self, mut record: Record) {
        let new_columns: Vec<String> = record
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| !self.columns.contains(name))
            .collect();
        for name in new_columns {
            for existing in &mut self.records {
                existing.insert(name.clone(), FieldValue::Null);
            }
            self.columns.push(name);
        }
        for name in &self.columns {
            if record.fields.get(name).is_none() {
                record.insert(name.clone(), FieldValue::Null);
            }
        }
        self.records.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
