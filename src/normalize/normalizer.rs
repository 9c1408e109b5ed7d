use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use super::aliases::AliasTable;
use super::defaults::LeadDefaults;
use crate::leads::{
    coerce_count, coerce_currency, coerce_text, normalize_column_name, CanonicalField, Coerced,
    Dataset, FieldValue, Record,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeOptions {
    pub aliases: AliasTable,
    pub defaults: LeadDefaults,
}

/// A present value that was discarded in favor of a default.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeNote {
    /// 0-based position of the record in the input
    pub row: usize,
    pub field: CanonicalField,
    pub original: FieldValue,
    pub replacement: FieldValue,
}

impl fmt::Display for NormalizeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: {} '{}' is not usable, defaulted to {}",
            self.row + 1,
            self.field,
            self.original,
            self.replacement
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub dataset: Dataset,
    pub notes: Vec<NormalizeNote>,
}

/// Map arbitrary input columns onto the canonical lead schema.
///
/// Every output record carries all nine canonical fields. `city`,
/// `industry`, `funding amount` and `employees` always hold a usable value;
/// the remaining canonical fields may be null. Columns that don't resolve to
/// a canonical field pass through under their trimmed, lowercased names.
pub fn normalize(raw: &Dataset, options: &NormalizeOptions) -> Normalized {
    // (original name, normalized name), first occurrence wins
    let mut columns: Vec<(String, String)> = Vec::with_capacity(raw.columns().len());
    for original in raw.columns() {
        let name = normalize_column_name(original);
        if columns.iter().any(|(_, existing)| *existing == name) {
            warn!("Column '{}' duplicates '{}' after normalization, dropping it", original, name);
            continue;
        }
        columns.push((original.clone(), name));
    }
    let names: Vec<String> = columns.iter().map(|(_, name)| name.clone()).collect();

    let mut claimed: HashSet<String> = HashSet::new();
    let mut sources: Vec<(CanonicalField, Option<String>)> = Vec::with_capacity(CanonicalField::ALL.len());
    for field in CanonicalField::ALL {
        let source = options
            .aliases
            .resolve(field, &names, |column| !claimed.contains(column))
            .map(str::to_string);
        match &source {
            Some(column) => {
                debug!("Resolved '{}' from column '{}'", field, column);
                claimed.insert(column.clone());
            }
            None => debug!("No column for '{}', filling with null", field),
        }
        sources.push((field, source));
    }

    let mut passthrough: Vec<&(String, String)> = Vec::new();
    for column in &columns {
        let (original, name) = column;
        if claimed.contains(name) {
            continue;
        }
        if CanonicalField::from_name(name).is_some_and(|field| field.name() == name) {
            warn!("Column '{}' is shadowed by the resolved canonical field, dropping it", original);
            continue;
        }
        passthrough.push(column);
    }

    let mut out_columns: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    out_columns.extend(passthrough.iter().map(|(_, name)| name.clone()));

    let mut dataset = Dataset::new(out_columns);
    let mut notes = Vec::new();

    for (row, raw_record) in raw.records().iter().enumerate() {
        let mut record = Record::new();

        for (field, source) in &sources {
            let value = source
                .as_deref()
                .and_then(|name| original_name(&columns, name))
                .and_then(|original| raw_record.get(original))
                .cloned()
                .unwrap_or_default();

            let (value, rejected) = apply_default(*field, value, &options.defaults);
            if let Some(original) = rejected {
                let note = NormalizeNote {
                    row,
                    field: *field,
                    original,
                    replacement: value.clone(),
                };
                debug!("{}", note);
                notes.push(note);
            }
            record.insert(field.name(), value);
        }

        for (original, name) in &passthrough {
            let value = raw_record.get(original).cloned().unwrap_or_default();
            record.insert(normalize_column_name(name), value);
        }

        dataset.push(record);
    }

    debug!(
        "Normalized {} records ({} of {} canonical fields resolved, {} values defaulted)",
        dataset.len(),
        claimed.len(),
        CanonicalField::ALL.len(),
        notes.len()
    );

    Normalized { dataset, notes }
}

fn original_name<'a>(columns: &'a [(String, String)], name: &str) -> Option<&'a str> {
    columns
        .iter()
        .find(|(_, normalized)| normalized == name)
        .map(|(original, _)| original.as_str())
}

/// Apply the documented fallback for `field`. Returns the final value and,
/// when a present value was discarded, the original.
fn apply_default(
    field: CanonicalField,
    value: FieldValue,
    defaults: &LeadDefaults,
) -> (FieldValue, Option<FieldValue>) {
    let coerced = match field {
        CanonicalField::City => text_default(&value, &defaults.city),
        CanonicalField::Industry => text_default(&value, &defaults.industry),
        CanonicalField::FundingAmount => {
            map_coerced(coerce_currency(&value, defaults.funding_amount), FieldValue::Number)
        }
        CanonicalField::Employees => map_coerced(coerce_count(&value, defaults.employees), |n| {
            FieldValue::Number(n as f64)
        }),
        _ => return (value, None),
    };

    match coerced {
        Coerced::Kept(kept) => (kept, None),
        Coerced::Missing(default) => (default, None),
        Coerced::Rejected(default) => (default, Some(value)),
    }
}

/// Text defaults keep the original value (and its type) when usable.
fn text_default(value: &FieldValue, default: &str) -> Coerced<FieldValue> {
    match coerce_text(value, default) {
        Coerced::Kept(_) => Coerced::Kept(value.clone()),
        Coerced::Missing(d) => Coerced::Missing(FieldValue::Text(d)),
        Coerced::Rejected(d) => Coerced::Rejected(FieldValue::Text(d)),
    }
}

fn map_coerced<T>(coerced: Coerced<T>, f: impl Fn(T) -> FieldValue) -> Coerced<FieldValue> {
    match coerced {
        Coerced::Kept(v) => Coerced::Kept(f(v)),
        Coerced::Missing(v) => Coerced::Missing(f(v)),
        Coerced::Rejected(v) => Coerced::Rejected(f(v)),
    }
}
