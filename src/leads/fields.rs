use std::fmt;

/// Name of the field the scorer writes onto every record.
pub const LEAD_SCORE_FIELD: &str = "lead score";

/// The nine standardized lead attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    Company,
    Website,
    Email,
    Linkedin,
    City,
    DealStage,
    Industry,
    FundingAmount,
    Employees,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 9] = [
        CanonicalField::Company,
        CanonicalField::Website,
        CanonicalField::Email,
        CanonicalField::Linkedin,
        CanonicalField::City,
        CanonicalField::DealStage,
        CanonicalField::Industry,
        CanonicalField::FundingAmount,
        CanonicalField::Employees,
    ];

    /// Column name used after normalization
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::Company => "company",
            CanonicalField::Website => "website",
            CanonicalField::Email => "email",
            CanonicalField::Linkedin => "linkedin",
            CanonicalField::City => "city",
            CanonicalField::DealStage => "deal stage",
            CanonicalField::Industry => "industry",
            CanonicalField::FundingAmount => "funding amount",
            CanonicalField::Employees => "employees",
        }
    }

    /// Look up a canonical field by name, ignoring case and surrounding
    /// whitespace. Underscores are accepted in place of spaces so config keys
    /// like `deal_stage` work.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize_column_name(name).replace('_', " ");
        Self::ALL.into_iter().find(|field| field.name() == wanted)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trim and lower-case a column name.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_field() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_from_name_accepts_config_spelling() {
        assert_eq!(CanonicalField::from_name("deal_stage"), Some(CanonicalField::DealStage));
        assert_eq!(CanonicalField::from_name(" Funding Amount "), Some(CanonicalField::FundingAmount));
        assert_eq!(CanonicalField::from_name("revenue"), None);
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Team Size "), "team size");
        assert_eq!(normalize_column_name("team size"), "team size");
    }
}
