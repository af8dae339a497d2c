//! Community Matchmaker - profile matchmaking for the community app
//!
//! Ranks member profiles against a requester using a weighted overlap of
//! markets, asset types, expertise and needs, and serves the top matches
//! over HTTP from profiles stored in Appwrite.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_match_score, score_breakdown};
pub use models::{Profile, ScoredCandidate, ScoringWeights, ScoreBreakdown, FindMatchesRequest, FindMatchesResponse};
pub use services::{AppwriteClient, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let score = calculate_match_score(&Profile::new("a"), &Profile::new("b"), &ScoringWeights::default());
        assert_eq!(score, 0.0);
    }
}
