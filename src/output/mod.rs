pub mod formatter;

pub use formatter::{
    format_facets, format_lead_detail, format_score, format_scored_table, should_use_colors,
};
