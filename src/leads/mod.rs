pub mod coerce;
pub mod fields;
pub mod ingest;
pub mod types;

pub use coerce::{coerce_count, coerce_currency, coerce_text, Coerced};
pub use fields::{normalize_column_name, CanonicalField, LEAD_SCORE_FIELD};
pub use ingest::{read_csv, read_dataset, read_json, InputFormat};
pub use types::{format_number, Dataset, FieldError, FieldValue, Record};
