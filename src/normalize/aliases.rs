use std::collections::BTreeMap;

use crate::leads::{normalize_column_name, CanonicalField};

/// Ordered alias lists per canonical field.
///
/// Precedence within a field is list order: the first alias present in the
/// input wins. Built-in aliases come first, configured extras are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    entries: Vec<(CanonicalField, Vec<String>)>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_aliases(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::Company => &["company", "organization", "business name"],
        CanonicalField::Website => &["website", "url"],
        // "email 1" outranks the canonical name
        CanonicalField::Email => &["email 1", "email", "contact email"],
        CanonicalField::Linkedin => &["linkedin", "linkedin url"],
        CanonicalField::City => &["city", "location"],
        CanonicalField::DealStage => &["deal stage", "funding stage"],
        CanonicalField::Industry => &["industry", "sector"],
        CanonicalField::FundingAmount => &["funding amount", "funding"],
        CanonicalField::Employees => &["employees", "team size"],
    }
}

impl AliasTable {
    pub fn builtin() -> Self {
        let entries = CanonicalField::ALL
            .into_iter()
            .map(|field| {
                let aliases = builtin_aliases(field).iter().map(|a| a.to_string()).collect();
                (field, aliases)
            })
            .collect();
        Self { entries }
    }

    /// Build the table from configured extras keyed by canonical field name.
    /// Returns every problem found: unknown field names and aliases claimed
    /// by more than one field.
    pub fn from_config(extra: &BTreeMap<String, Vec<String>>) -> Result<Self, Vec<String>> {
        let mut table = Self::builtin();
        let mut errors = Vec::new();

        for (key, aliases) in extra {
            match CanonicalField::from_name(key) {
                Some(field) => table.extend(field, aliases.iter().map(String::as_str)),
                None => errors.push(format!("aliases.{}: unknown canonical field", key)),
            }
        }

        errors.extend(table.conflicts());

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(errors)
        }
    }

    /// Append aliases for `field`, normalizing them and skipping duplicates.
    pub fn extend<'a>(&mut self, field: CanonicalField, aliases: impl IntoIterator<Item = &'a str>) {
        if let Some((_, list)) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            for alias in aliases {
                let alias = normalize_column_name(alias);
                if !alias.is_empty() && !list.contains(&alias) {
                    list.push(alias);
                }
            }
        }
    }

    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// First alias of `field` that appears in `columns` and passes `available`.
    pub fn resolve<'c>(
        &self,
        field: CanonicalField,
        columns: &'c [String],
        available: impl Fn(&str) -> bool,
    ) -> Option<&'c str> {
        self.aliases(field).iter().find_map(|alias| {
            columns
                .iter()
                .find(|column| *column == alias && available(column.as_str()))
                .map(String::as_str)
        })
    }

    /// Describe every alias listed under more than one canonical field.
    pub fn conflicts(&self) -> Vec<String> {
        let mut owners: BTreeMap<&str, Vec<CanonicalField>> = BTreeMap::new();
        for (field, aliases) in &self.entries {
            for alias in aliases {
                owners.entry(alias.as_str()).or_default().push(*field);
            }
        }
        owners
            .into_iter()
            .filter(|(_, fields)| fields.len() > 1)
            .map(|(alias, fields)| {
                let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
                format!("aliases: '{}' is claimed by {}", alias, names.join(", "))
            })
            .collect()
    }
}
