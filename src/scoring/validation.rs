use super::config::{MatchRule, ScoringConfig, ThresholdRule};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref rule) = config.deal_stage {
        check_match_rule("scoring.deal_stage", rule, &mut errors);
    }
    if let Some(ref rule) = config.funding_amount {
        check_threshold_rule("scoring.funding_amount", rule, &mut errors);
    }
    if let Some(ref rule) = config.employees {
        check_threshold_rule("scoring.employees", rule, &mut errors);
    }
    if let Some(ref rule) = config.industry {
        check_match_rule("scoring.industry", rule, &mut errors);
    }
    if let Some(ref rule) = config.city {
        check_match_rule("scoring.city", rule, &mut errors);
    }

    let total: u64 = [&config.deal_stage, &config.industry, &config.city]
        .into_iter()
        .flatten()
        .map(|rule| u64::from(rule.weight))
        .chain(
            [&config.funding_amount, &config.employees]
                .into_iter()
                .flatten()
                .map(|rule| u64::from(rule.weight)),
        )
        .sum();
    if total > u64::from(u32::MAX) {
        errors.push(format!(
            "scoring: weights add up to {}, more than the maximum score of {}",
            total,
            u32::MAX
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_match_rule(path: &str, rule: &MatchRule, errors: &mut Vec<String>) {
    if rule.values.is_empty() {
        errors.push(format!("{}.values: must list at least one value", path));
    }
    for (i, value) in rule.values.iter().enumerate() {
        if value.trim().is_empty() {
            errors.push(format!("{}.values[{}]: must not be blank", path, i));
        }
    }
}

fn check_threshold_rule(path: &str, rule: &ThresholdRule, errors: &mut Vec<String>) {
    if !rule.min.is_finite() || rule.min < 0.0 {
        errors.push(format!(
            "{}.min: must be a non-negative number, got {}",
            path, rule.min
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> ScoringConfig {
        ScoringConfig {
            deal_stage: None,
            funding_amount: None,
            employees: None,
            industry: None,
            city: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        assert!(validate_scoring(&empty_config()).is_ok());
    }

    #[test]
    fn test_empty_match_values() {
        let mut config = empty_config();
        config.industry = Some(MatchRule {
            values: vec![],
            weight: 1,
            case_sensitive: false,
        });
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.industry.values"));
    }

    #[test]
    fn test_blank_match_value() {
        let mut config = empty_config();
        config.city = Some(MatchRule {
            values: vec!["Pune".to_string(), " ".to_string()],
            weight: 1,
            case_sensitive: false,
        });
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors, vec!["scoring.city.values[1]: must not be blank".to_string()]);
    }

    #[test]
    fn test_total_weight_overflow() {
        let mut config = empty_config();
        config.funding_amount = Some(ThresholdRule { min: 0.0, weight: 3_000_000_000 });
        config.employees = Some(ThresholdRule { min: 0.0, weight: 3_000_000_000 });
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("6000000000"));
    }

    #[test]
    fn test_negative_threshold() {
        let mut config = empty_config();
        config.employees = Some(ThresholdRule { min: -1.0, weight: 2 });
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.employees.min"));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = empty_config();
        config.funding_amount = Some(ThresholdRule { min: f64::NAN, weight: 3 }); // Error 1
        config.deal_stage = Some(MatchRule {
            values: vec![],
            weight: 2,
            case_sensitive: true,
        }); // Error 2
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
