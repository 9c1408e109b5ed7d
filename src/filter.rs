use std::collections::BTreeSet;

use crate::leads::{CanonicalField, Record};
use crate::scoring::ScoredLead;

/// Industry/city selection. An unset criterion matches every lead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub industry: Option<String>,
    pub city: Option<String>,
}

impl LeadFilter {
    pub fn is_empty(&self) -> bool {
        self.industry.is_none() && self.city.is_none()
    }

    /// Exact, case-sensitive comparison against the normalized values
    pub fn matches(&self, record: &Record) -> bool {
        let field_matches = |field: CanonicalField, wanted: &Option<String>| match wanted {
            Some(wanted) => record.text(field.name()).as_deref() == Some(wanted.as_str()),
            None => true,
        };
        field_matches(CanonicalField::Industry, &self.industry)
            && field_matches(CanonicalField::City, &self.city)
    }
}

/// Keep leads matching `filter`, preserving rank order
pub fn filter_leads<'a>(leads: &'a [ScoredLead], filter: &LeadFilter) -> Vec<&'a ScoredLead> {
    leads.iter().filter(|lead| filter.matches(&lead.record)).collect()
}

/// Sorted distinct non-null values of `field`, for building filter options
pub fn distinct_values<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    field: CanonicalField,
) -> Vec<String> {
    records
        .into_iter()
        .filter_map(|record| record.text(field.name()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
