use serde::{Deserialize, Serialize};

/// Fallback values substituted during normalization.
///
/// Example YAML:
/// ```yaml
/// defaults:
///   city: Bangalore
///   industry: SaaS
///   funding_amount: 1000000
///   employees: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct LeadDefaults {
    pub city: String,
    pub industry: String,
    pub funding_amount: f64,
    pub employees: u64,
}

impl Default for LeadDefaults {
    fn default() -> Self {
        Self {
            city: "Bangalore".to_string(),
            industry: "SaaS".to_string(),
            funding_amount: 1_000_000.0,
            employees: 50,
        }
    }
}

/// Validate defaults, returning every problem found.
pub fn validate_defaults(defaults: &LeadDefaults) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if defaults.city.trim().is_empty() {
        errors.push("defaults.city: must not be blank".to_string());
    }
    if defaults.industry.trim().is_empty() {
        errors.push("defaults.industry: must not be blank".to_string());
    }
    if !defaults.funding_amount.is_finite() || defaults.funding_amount < 0.0 {
        errors.push(format!(
            "defaults.funding_amount: must be a non-negative number, got {}",
            defaults.funding_amount
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let defaults = LeadDefaults::default();
        assert_eq!(defaults.city, "Bangalore");
        assert_eq!(defaults.industry, "SaaS");
        assert_eq!(defaults.funding_amount, 1_000_000.0);
        assert_eq!(defaults.employees, 50);
    }

    #[test]
    fn test_partial_parse_fills_remaining_defaults() {
        let yaml = "city: Pune\n";
        let defaults: LeadDefaults = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(defaults.city, "Pune");
        assert_eq!(defaults.industry, "SaaS");
        assert_eq!(defaults.employees, 50);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "region: EU\n";
        assert!(serde_saphyr::from_str::<LeadDefaults>(yaml).is_err());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let defaults = LeadDefaults {
            city: " ".to_string(),
            industry: String::new(),
            funding_amount: -1.0,
            employees: 0,
        };
        let errors = validate_defaults(&defaults).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[2].contains("funding_amount"));
    }

    #[test]
    fn test_validate_default_is_ok() {
        assert!(validate_defaults(&LeadDefaults::default()).is_ok());
    }
}
