use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Defines how lead scores are calculated. Each rule is optional; an omitted
/// rule contributes nothing. Weights are added when the rule matches.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   deal_stage:
///     values: ["Series A", "Series B", "Series C"]
///     weight: 2
///     case_sensitive: true
///   funding_amount: { min: 1000000, weight: 3 }
///   employees: { min: 50, weight: 2 }
///   industry: { values: ["saas"], weight: 1 }
///   city:
///     values: ["bangalore", "san francisco", "new york"]
///     weight: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Deal stage must equal one of the listed stages
    #[serde(default)]
    pub deal_stage: Option<MatchRule>,

    /// Funding amount must reach the threshold
    #[serde(default)]
    pub funding_amount: Option<ThresholdRule>,

    /// Headcount must reach the threshold
    #[serde(default)]
    pub employees: Option<ThresholdRule>,

    #[serde(default)]
    pub industry: Option<MatchRule>,

    #[serde(default)]
    pub city: Option<MatchRule>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            deal_stage: Some(MatchRule {
                values: vec![
                    "Series A".to_string(),
                    "Series B".to_string(),
                    "Series C".to_string(),
                ],
                weight: 2,
                case_sensitive: true,
            }),
            funding_amount: Some(ThresholdRule {
                min: 1_000_000.0,
                weight: 3,
            }),
            employees: Some(ThresholdRule { min: 50.0, weight: 2 }),
            industry: Some(MatchRule {
                values: vec!["saas".to_string()],
                weight: 1,
                case_sensitive: false,
            }),
            city: Some(MatchRule {
                values: vec![
                    "bangalore".to_string(),
                    "san francisco".to_string(),
                    "new york".to_string(),
                ],
                weight: 1,
                case_sensitive: false,
            }),
        }
    }
}

impl ScoringConfig {
    /// Highest score a lead can reach: every configured weight added up.
    pub fn max_score(&self) -> u32 {
        let match_weights = [&self.deal_stage, &self.industry, &self.city]
            .into_iter()
            .flatten()
            .map(|rule| rule.weight);
        let threshold_weights = [&self.funding_amount, &self.employees]
            .into_iter()
            .flatten()
            .map(|rule| rule.weight);
        match_weights
            .chain(threshold_weights)
            .fold(0u32, |total, weight| total.saturating_add(weight))
    }
}

/// Text rule: matches when the field equals one of `values`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchRule {
    pub values: Vec<String>,

    pub weight: u32,

    /// Compare exactly instead of ignoring case (default: false)
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Numeric rule: matches when the field is at least `min`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThresholdRule {
    pub min: f64,

    pub weight: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.deal_stage.as_ref().map(|r| r.weight), Some(2));
        assert_eq!(config.funding_amount.as_ref().map(|r| r.min), Some(1_000_000.0));
        assert_eq!(config.employees.as_ref().map(|r| r.min), Some(50.0));
        assert!(config.deal_stage.unwrap().case_sensitive);
        assert!(!config.city.unwrap().case_sensitive);
    }

    #[test]
    fn test_default_max_score_is_nine() {
        assert_eq!(ScoringConfig::default().max_score(), 9);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
employees:
  min: 100
  weight: 5
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.employees, Some(ThresholdRule { min: 100.0, weight: 5 }));
        assert!(config.deal_stage.is_none());
        assert!(config.funding_amount.is_none());
        assert_eq!(config.max_score(), 5);
    }

    #[test]
    fn test_match_rule_case_sensitive_defaults_false() {
        let yaml = r#"
industry:
  values: ["fintech"]
  weight: 2
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(!config.industry.unwrap().case_sensitive);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.max_score(), 0);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let yaml = "revenue:\n  min: 5\n  weight: 1\n";
        assert!(serde_saphyr::from_str::<ScoringConfig>(yaml).is_err());
    }
}
