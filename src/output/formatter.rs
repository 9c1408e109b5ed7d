use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::leads::{CanonicalField, Record};
use crate::scoring::ScoredLead;

const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score. If incomplete is true, appends asterisk to indicate that
/// some rules could not be evaluated
pub fn format_score(score: u32, incomplete: bool) -> String {
    if incomplete {
        format!("{}*", score)
    } else {
        score.to_string()
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn company_name(record: &Record) -> String {
    record
        .text(CanonicalField::Company.name())
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string())
}

fn field_or_dash(record: &Record, field: CanonicalField) -> String {
    record.text(field.name()).unwrap_or_else(|| "-".to_string())
}

/// Format leads as a ranked table with columns: Index, Score, Company, Industry/City
/// No headers
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 3 chars wide
pub fn format_scored_table(leads: &[&ScoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 3;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            // 1-based index, right-aligned with trailing dot
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format_score(lead.result.score, lead.result.incomplete());
            let score_padded = format!("{:>width$}", score_str, width = score_width);

            let location = format!(
                "{} | {}",
                field_or_dash(&lead.record, CanonicalField::Industry),
                field_or_dash(&lead.record, CanonicalField::City)
            );
            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + location.chars().count();

            let company = company_name(&lead.record);
            let company = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_text(&company, width - fixed_width)
                } else {
                    // Very narrow terminal, show truncated
                    truncate_text(&company, 20)
                }
            } else {
                // No terminal (pipe), don't truncate
                company
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    company.bold(),
                    separator,
                    location.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, company, separator, location
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single lead with every canonical field, the score breakdown and
/// any diagnostics
pub fn format_lead_detail(lead: &ScoredLead, max_score: u32, use_colors: bool) -> String {
    let record = &lead.record;
    let company = company_name(record);
    let score = format!(
        "{}/{}",
        format_score(lead.result.score, lead.result.incomplete()),
        max_score
    );

    let mut lines = Vec::new();
    if use_colors {
        lines.push(format!("{}  {}", company.bold(), score.green()));
    } else {
        lines.push(format!("{}  {}", company, score));
    }

    for field in CanonicalField::ALL.iter().skip(1) {
        let label = capitalize(field.name());
        let value = field_or_dash(record, *field);
        if use_colors && matches!(field, CanonicalField::Website | CanonicalField::Linkedin) {
            lines.push(format!("  {}: {}", label, value.underline()));
        } else {
            lines.push(format!("  {}: {}", label, value));
        }
    }

    if !lead.result.breakdown.is_empty() {
        lines.push("  Score breakdown:".to_string());
        for contribution in &lead.result.breakdown {
            lines.push(format!(
                "    +{} {}: {}",
                contribution.points, contribution.label, contribution.description
            ));
        }
    }

    for diagnostic in &lead.result.diagnostics {
        if use_colors {
            lines.push(format!("  {} {}", "warning:".yellow(), diagnostic));
        } else {
            lines.push(format!("  warning: {}", diagnostic));
        }
    }

    lines.join("\n")
}

/// Format the distinct industries and cities available for filtering
pub fn format_facets(industries: &[String], cities: &[String]) -> String {
    let list = |values: &[String]| {
        if values.is_empty() {
            "  (none)".to_string()
        } else {
            values
                .iter()
                .map(|v| format!("  {}", v))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    format!("Industries:\n{}\nCities:\n{}", list(industries), list(cities))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::FieldValue;
    use crate::scoring::{RuleContribution, ScoreResult};

    fn sample_lead() -> ScoredLead {
        let record: Record = vec![
            ("company", FieldValue::from("Acme")),
            ("website", FieldValue::from("https://acme.io")),
            ("email", FieldValue::Null),
            ("deal stage", FieldValue::from("Series B")),
            ("industry", FieldValue::from("SaaS")),
            ("city", FieldValue::from("Bangalore")),
            ("funding amount", FieldValue::Number(2_000_000.0)),
            ("employees", FieldValue::Number(80.0)),
        ]
        .into_iter()
        .collect();
        ScoredLead {
            record,
            result: ScoreResult {
                score: 9,
                breakdown: vec![RuleContribution {
                    label: "Deal stage".to_string(),
                    description: "'Series B' in [Series A, Series B, Series C]".to_string(),
                    points: 2,
                }],
                diagnostics: vec![],
            },
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(9, false), "9");
        assert_eq!(format_score(0, false), "0");
        assert_eq!(format_score(5, true), "5*");
    }

    // truncate_text tests
    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Short name", 20), "Short name");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("This is a very long company", 15), "This is a ve...");
    }

    #[test]
    fn test_truncate_text_very_narrow() {
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        let leads: Vec<&ScoredLead> = vec![];
        assert_eq!(format_scored_table(&leads, false), "No leads found.");
    }

    #[test]
    fn test_format_scored_table_single() {
        let lead = sample_lead();
        let result = format_scored_table(&[&lead], false);
        assert!(result.starts_with(" 1."));
        assert!(result.contains("  9  "));
        assert!(result.contains("Acme"));
        assert!(result.contains("SaaS | Bangalore"));
    }

    #[test]
    fn test_format_scored_table_unknown_company_and_incomplete() {
        let mut lead = sample_lead();
        lead.record.insert("company", FieldValue::Null);
        lead.result.score = 5;
        lead.result.diagnostics.push("bad value".to_string());
        let result = format_scored_table(&[&lead], false);
        assert!(result.contains("Unknown Company"));
        assert!(result.contains("5*"));
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let first = sample_lead();
        let mut second = sample_lead();
        second.record.insert("company", FieldValue::from("Globex"));
        second.result.score = 3;

        let result = format_scored_table(&[&first, &second], false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 1.") && lines[0].contains("Acme"));
        assert!(lines[1].contains(" 2.") && lines[1].contains("Globex"));
    }

    #[test]
    fn test_format_lead_detail() {
        let lead = sample_lead();
        let result = format_lead_detail(&lead, 9, false);
        assert!(result.starts_with("Acme  9/9"));
        assert!(result.contains("Website: https://acme.io"));
        assert!(result.contains("Email: -"));
        assert!(result.contains("Deal stage: Series B"));
        assert!(result.contains("Funding amount: 2000000"));
        assert!(result.contains("+2 Deal stage:"));
        assert!(!result.contains("warning:"));
    }

    #[test]
    fn test_format_lead_detail_shows_diagnostics() {
        let mut lead = sample_lead();
        lead.result.diagnostics.push("field 'employees' expected a number".to_string());
        let result = format_lead_detail(&lead, 9, false);
        assert!(result.contains("9*/9"));
        assert!(result.contains("warning: field 'employees'"));
    }

    #[test]
    fn test_format_facets() {
        let result = format_facets(&["SaaS".to_string()], &[]);
        assert_eq!(result, "Industries:\n  SaaS\nCities:\n  (none)");
    }
}
