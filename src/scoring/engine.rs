use tracing::{debug, warn};

use super::config::{MatchRule, ScoringConfig, ThresholdRule};
use crate::leads::{CanonicalField, Dataset, FieldValue, Record, LEAD_SCORE_FIELD};

#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub label: String,       // e.g. "Deal stage", "Employees"
    pub description: String, // e.g. "'Series B' in [Series A, Series B, Series C]"
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: Vec<RuleContribution>,
    /// Rules that could not be evaluated for this record
    pub diagnostics: Vec<String>,
}

impl ScoreResult {
    /// True when at least one rule was skipped because of bad data
    pub fn incomplete(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A record together with how it scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLead {
    pub record: Record,
    pub result: ScoreResult,
}

/// Scored leads in rank order (highest score first).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoredDataset {
    columns: Vec<String>,
    leads: Vec<ScoredLead>,
}

impl ScoredDataset {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn leads(&self) -> &[ScoredLead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.leads.iter().map(|lead| &lead.record)
    }
}

/// Score a single record. Never fails: a rule whose field holds the wrong
/// kind of value contributes nothing and is reported in `diagnostics`.
pub fn calculate_score(record: &Record, config: &ScoringConfig) -> ScoreResult {
    let mut result = ScoreResult::default();

    if let Some(ref rule) = config.deal_stage {
        apply_match_rule(&mut result, record, CanonicalField::DealStage, "Deal stage", rule);
    }
    if let Some(ref rule) = config.funding_amount {
        apply_threshold_rule(&mut result, record, CanonicalField::FundingAmount, "Funding", rule);
    }
    if let Some(ref rule) = config.employees {
        apply_threshold_rule(&mut result, record, CanonicalField::Employees, "Employees", rule);
    }
    if let Some(ref rule) = config.industry {
        apply_match_rule(&mut result, record, CanonicalField::Industry, "Industry", rule);
    }
    if let Some(ref rule) = config.city {
        apply_match_rule(&mut result, record, CanonicalField::City, "City", rule);
    }

    result
}

fn apply_match_rule(
    result: &mut ScoreResult,
    record: &Record,
    field: CanonicalField,
    label: &str,
    rule: &MatchRule,
) {
    let (points, description) = match record.text(field.name()) {
        Some(value) if rule.matches(&value) => {
            (rule.weight, format!("'{}' {}", value, rule.describe()))
        }
        Some(value) => (0, format!("'{}' not {}", value, rule.describe())),
        None => (0, format!("missing, needs {}", rule.describe())),
    };
    result.score = result.score.saturating_add(points);
    result.breakdown.push(RuleContribution {
        label: label.to_string(),
        description,
        points,
    });
}

fn apply_threshold_rule(
    result: &mut ScoreResult,
    record: &Record,
    field: CanonicalField,
    label: &str,
    rule: &ThresholdRule,
) {
    let (points, description) = match record.number(field.name()) {
        Ok(Some(value)) if rule.matches(value) => (
            rule.weight,
            format!("{} {}", FieldValue::Number(value), rule.describe()),
        ),
        Ok(Some(value)) => (
            0,
            format!("{} below {}", FieldValue::Number(value), rule.describe()),
        ),
        Ok(None) => (0, format!("missing, needs {}", rule.describe())),
        Err(e) => {
            result.diagnostics.push(e.to_string());
            (0, "not evaluated".to_string())
        }
    };
    result.score = result.score.saturating_add(points);
    result.breakdown.push(RuleContribution {
        label: label.to_string(),
        description,
        points,
    });
}

/// Score every record and return them ranked by descending score.
///
/// Each record gets a `lead score` field; all other values are left as they
/// were. The sort is stable, so leads with equal scores keep input order.
pub fn score(dataset: Dataset, config: &ScoringConfig) -> ScoredDataset {
    let mut columns = dataset.columns().to_vec();
    if !columns.iter().any(|c| c == LEAD_SCORE_FIELD) {
        columns.push(LEAD_SCORE_FIELD.to_string());
    }

    let mut leads: Vec<ScoredLead> = dataset
        .into_records()
        .into_iter()
        .enumerate()
        .map(|(row, mut record)| {
            let result = calculate_score(&record, config);
            for diagnostic in &result.diagnostics {
                warn!("Row {}: {}; rule scored 0", row + 1, diagnostic);
            }
            record.insert(LEAD_SCORE_FIELD, FieldValue::from(result.score));
            ScoredLead { record, result }
        })
        .collect();

    // Primary and only key: score descending. sort_by is stable.
    leads.sort_by(|a, b| b.result.score.cmp(&a.result.score));

    debug!(
        "Scored {} leads (top score {})",
        leads.len(),
        leads.first().map(|l| l.result.score).unwrap_or(0)
    );

    ScoredDataset { columns, leads }
}
