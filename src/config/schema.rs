use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::{validate_defaults, AliasTable, LeadDefaults, NormalizeOptions};
use crate::scoring::{validate_scoring, ScoringConfig};

/// Top-level config file. Every section is optional.
///
/// Example YAML:
/// ```yaml
/// defaults:
///   city: Bangalore
/// scoring:
///   employees: { min: 100, weight: 2 }
/// aliases:
///   employees: ["headcount"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Option<LeadDefaults>,

    /// Replaces the built-in scoring rules entirely when present
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Extra column aliases per canonical field, tried after the built-ins
    #[serde(default)]
    pub aliases: Option<BTreeMap<String, Vec<String>>>,
}

impl Config {
    /// Config with every section filled in, as written by `init`
    pub fn template() -> Self {
        Self {
            defaults: Some(LeadDefaults::default()),
            scoring: Some(ScoringConfig::default()),
            aliases: Some(BTreeMap::new()),
        }
    }

    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_defaults(&self) -> LeadDefaults {
        self.defaults.clone().unwrap_or_default()
    }

    /// Normalizer options built from the defaults and alias sections.
    pub fn normalize_options(&self) -> Result<NormalizeOptions, Vec<String>> {
        let aliases = match &self.aliases {
            Some(extra) => AliasTable::from_config(extra)?,
            None => AliasTable::builtin(),
        };
        Ok(NormalizeOptions {
            aliases,
            defaults: self.effective_defaults(),
        })
    }
}

/// Validate every section, returning all problems found.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_defaults(&config.effective_defaults()) {
        errors.extend(e);
    }
    if let Err(e) = validate_scoring(&config.effective_scoring()) {
        errors.extend(e);
    }
    if let Err(e) = config.normalize_options() {
        errors.extend(e);
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
    use crate::leads::CanonicalField;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
        assert_eq!(config.effective_defaults(), LeadDefaults::default());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
defaults:
  city: Pune
  employees: 20
scoring:
  funding_amount:
    min: 500000
    weight: 4
aliases:
  employees: ["Headcount"]
  company: ["account"]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let defaults = config.effective_defaults();
        assert_eq!(defaults.city, "Pune");
        assert_eq!(defaults.employees, 20);
        assert_eq!(defaults.industry, "SaaS");

        let scoring = config.effective_scoring();
        assert_eq!(scoring.max_score(), 4);

        let options = config.normalize_options().unwrap();
        assert!(options
            .aliases
            .aliases(CanonicalField::Employees)
            .contains(&"headcount".to_string()));
    }

    #[test]
    fn test_alias_conflict_fails_validation_before_options() {
        let yaml = r#"
aliases:
  city: ["sector"]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let errors = validate_config(&config)
            .and_then(|()| config.normalize_options())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'sector'"));
    }

    #[test]
    fn test_template_roundtrip() {
        let config = Config::template();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(serde_saphyr::from_str::<Config>("queries: []\n").is_err());
    }

    #[test]
    fn test_validate_collects_errors_across_sections() {
        let yaml = r#"
defaults:
  funding_amount: -1
scoring:
  city:
    values: []
    weight: 1
aliases:
  revenue: ["arr"]
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
