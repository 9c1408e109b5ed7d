use super::config::{MatchRule, ThresholdRule};
use crate::leads::format_number;

impl MatchRule {
    pub fn matches(&self, value: &str) -> bool {
        if self.case_sensitive {
            self.values.iter().any(|v| v == value)
        } else {
            let value = value.to_lowercase();
            self.values.iter().any(|v| v.to_lowercase() == value)
        }
    }

    /// Short form for breakdowns, e.g. "in [Series A, Series B]"
    pub fn describe(&self) -> String {
        format!("in [{}]", self.values.join(", "))
    }
}

impl ThresholdRule {
    pub fn matches(&self, value: f64) -> bool {
        value >= self.min
    }

    pub fn describe(&self) -> String {
        format!(">= {}", format_number(self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_rule(case_sensitive: bool) -> MatchRule {
        MatchRule {
            values: vec!["Series A".to_string(), "Series B".to_string()],
            weight: 2,
            case_sensitive,
        }
    }

    #[test]
    fn test_match_case_sensitive() {
        let rule = stage_rule(true);
        assert!(rule.matches("Series A"));
        assert!(!rule.matches("series a"));
        assert!(!rule.matches("Series A "));
    }

    #[test]
    fn test_match_case_insensitive() {
        let rule = stage_rule(false);
        assert!(rule.matches("SERIES b"));
        assert!(!rule.matches("Seed"));
    }

    #[test]
    fn test_threshold_inclusive() {
        let rule = ThresholdRule { min: 50.0, weight: 2 };
        assert!(!rule.matches(49.0));
        assert!(rule.matches(50.0));
        assert!(rule.matches(51.0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(stage_rule(true).describe(), "in [Series A, Series B]");
        let rule = ThresholdRule { min: 1_000_000.0, weight: 3 };
        assert_eq!(rule.describe(), ">= 1000000");
    }
}
