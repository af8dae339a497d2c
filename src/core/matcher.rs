use std::cmp::Ordering;

use crate::models::{Profile, ScoredCandidate, ScoringWeights};
use crate::core::scoring::calculate_match_score;
use crate::services::ProfileStore;

/// Number of matches returned per request
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Fetch the requester and the candidate pool
/// 2. Score every candidate against the requester
/// 3. Drop candidates without any positive signal
/// 4. Rank by score and keep the top entries
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Find the best matches for a user
    ///
    /// Both fetches are issued concurrently. A requester without a profile
    /// yields an empty list whatever the candidate fetch returned; any other
    /// store failure is returned as-is.
    ///
    /// # Arguments
    /// * `requester_id` - The user asking for matches
    /// * `store` - Source of the requester profile and the candidate pool
    pub async fn find_matches<S>(
        &self,
        requester_id: &str,
        store: &S,
    ) -> Result<Vec<ScoredCandidate>, S::Error>
    where
        S: ProfileStore + ?Sized,
    {
        let (requester, candidates) = tokio::join!(
            store.fetch_profile(requester_id),
            store.fetch_other_profiles(requester_id),
        );

        let Some(requester) = requester? else {
            tracing::debug!("No profile for {}, skipping matchmaking", requester_id);
            return Ok(Vec::new());
        };

        let candidates = candidates?;
        let total_candidates = candidates.len();
        let matches = self.rank(&requester, candidates);

        tracing::debug!(
            "Ranked {} matches for {} from {} candidates",
            matches.len(),
            requester_id,
            total_candidates
        );

        Ok(matches)
    }

    /// Score, filter and rank candidates for an already fetched requester
    ///
    /// Equal scores keep the order the candidates were given in.
    pub fn rank(&self, requester: &Profile, candidates: Vec<Profile>) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            // Never match a user with themselves
            .filter(|profile| profile.id != requester.id)
            .filter_map(|profile| {
                let match_score = calculate_match_score(requester, &profile, &self.weights);

                // NaN fails this comparison too
                if match_score > 0.0 {
                    Some(ScoredCandidate { profile, match_score })
                } else {
                    tracing::trace!("Dropping {} with score {}", profile.id, match_score);
                    None
                }
            })
            .collect();

        // sort_by is stable, ties stay in fetch order
        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        scored.truncate(self.max_results);
        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
