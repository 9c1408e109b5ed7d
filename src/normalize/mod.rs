pub mod aliases;
pub mod defaults;
pub mod normalizer;

pub use aliases::AliasTable;
pub use defaults::{validate_defaults, LeadDefaults};
pub use normalizer::{normalize, NormalizeNote, NormalizeOptions, Normalized};
