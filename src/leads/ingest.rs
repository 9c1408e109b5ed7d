use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::types::{Dataset, FieldValue, Record};
use crate::error::{LeadError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// `.json` files are read as JSON, everything else as CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Read a lead spreadsheet from disk, picking the format from the extension.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let format = InputFormat::from_path(path);
    tracing::debug!("Reading {} as {:?}", path.display(), format);
    match format {
        InputFormat::Csv => read_csv(file),
        InputFormat::Json => read_json(file),
    }
}

/// Read CSV with a mandatory header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.iter().all(|name| name.trim().is_empty()) {
        return Err(LeadError::InvalidInput("missing CSV header row".to_string()));
    }

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        rows.push(row.iter().map(FieldValue::from_cell).collect());
    }

    Dataset::from_rows(header, rows)
}

/// Read a JSON array of flat objects.
pub fn read_json<R: Read>(reader: R) -> Result<Dataset> {
    let root: Value = serde_json::from_reader(reader)?;
    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(LeadError::InvalidInput(format!(
                "expected a JSON array of lead objects, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let object = match item {
            Value::Object(object) => object,
            other => {
                return Err(LeadError::InvalidInput(format!(
                    "element {} is {}, expected an object",
                    i,
                    json_kind(&other)
                )))
            }
        };

        let mut record = Record::new();
        for (key, value) in object {
            let value = match value {
                Value::Null => FieldValue::Null,
                Value::Bool(b) => FieldValue::Text(b.to_string()),
                Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or_default(),
                Value::String(s) => FieldValue::Text(s),
                nested => {
                    return Err(LeadError::InvalidInput(format!(
                        "field '{}' of element {} is {}, expected a flat value",
                        key,
                        i,
                        json_kind(&nested)
                    )))
                }
            };
            record.insert(key, value);
        }
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
