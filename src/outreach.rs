use crate::leads::{CanonicalField, Record};

/// Which of a lead's links to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Website,
    Linkedin,
    Map,
}

/// Google Maps search link for a city
pub fn map_url(city: &str) -> String {
    format!("https://www.google.com/maps/search/{}", city.trim().replace(' ', "+"))
}

/// Resolve a link for `record`, or `None` when the lead has no such value.
pub fn link_for(record: &Record, target: LinkTarget) -> Option<String> {
    let non_blank = |field: CanonicalField| {
        record
            .text(field.name())
            .filter(|value| !value.trim().is_empty())
    };
    match target {
        LinkTarget::Website => non_blank(CanonicalField::Website),
        LinkTarget::Linkedin => non_blank(CanonicalField::Linkedin),
        LinkTarget::Map => non_blank(CanonicalField::City).map(|city| map_url(&city)),
    }
}

/// Plain-text first-touch email for a lead.
///
/// Only leads with an email address get a draft.
pub fn draft_email(record: &Record) -> Option<String> {
    record
        .text(CanonicalField::Email.name())
        .filter(|email| !email.trim().is_empty())?;

    let greeting = match record.text(CanonicalField::Company.name()) {
        Some(company) => format!("Hi {} team,", company),
        None => "Hi team,".to_string(),
    };
    let stage = record
        .text(CanonicalField::DealStage.name())
        .unwrap_or_else(|| "N/A".to_string());

    Some(format!(
        "{greeting}\n\n\
         I came across your company while researching innovative businesses and was impressed \
         by your journey and stage ({stage}).\n\n\
         We help teams like yours streamline lead gen and outreach using custom tools, and I'd \
         love to share more if you're open to a quick chat.\n\n\
         Best,\n\
         [Your Name]"
    ))
}
