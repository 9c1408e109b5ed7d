//! Lead spreadsheet normalization and scoring.
//!
//! The pipeline is `read -> normalize -> score`: column names are reconciled
//! to a canonical schema, missing values get documented defaults, and every
//! lead receives an integer priority score. Results come back ranked by
//! descending score.

pub mod browser;
pub mod config;
pub mod error;
pub mod filter;
pub mod leads;
pub mod logging;
pub mod normalize;
pub mod outreach;
pub mod output;
pub mod rank;
pub mod scoring;

pub use error::{LeadError, Result};
pub use normalize::normalize;
pub use rank::{rank_dataset, rank_file, Ranked};
pub use scoring::score;
