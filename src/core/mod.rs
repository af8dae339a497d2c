// Core algorithm exports
pub mod matcher;
pub mod overlap;
pub mod scoring;

pub use matcher::{Matcher, DEFAULT_MAX_RESULTS};
pub use overlap::{overlap_count, weighted_overlap};
pub use scoring::{calculate_match_score, score_breakdown};
