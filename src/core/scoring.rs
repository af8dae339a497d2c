use crate::models::{Profile, ScoreBreakdown, ScoringWeights};
use crate::core::overlap::{overlap_count, weighted_overlap};

/// Calculate the compatibility score of `candidate` for `requester`
///
/// Scoring formula, each overlap divided by `weights.overlap_divisor`:
/// score = (
///     markets ∩ markets            * 0.20 +
///     asset types ∩ asset types    * 0.15 +
///     expertise ∩ expertise        * 0.10 +
///     needs ∩ candidate expertise  * 0.40 +   # candidate solves my needs
///     expertise ∩ candidate needs  * 0.15     # I solve the candidate's needs
/// )
///
/// The score is directional and not clamped: more than `overlap_divisor`
/// shared tags in one term pushes that term past its weight.
pub fn calculate_match_score(
    requester: &Profile,
    candidate: &Profile,
    weights: &ScoringWeights,
) -> f64 {
    score_breakdown(requester, candidate, weights).total()
}

/// Per-term contributions behind [`calculate_match_score`]
pub fn score_breakdown(
    requester: &Profile,
    candidate: &Profile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let divisor = weights.overlap_divisor;

    ScoreBreakdown {
        markets: weighted_overlap(
            overlap_count(&requester.markets, &candidate.markets),
            divisor,
            weights.markets,
        ),
        asset_types: weighted_overlap(
            overlap_count(&requester.asset_types, &candidate.asset_types),
            divisor,
            weights.asset_types,
        ),
        shared_expertise: weighted_overlap(
            overlap_count(&requester.expertise, &candidate.expertise),
            divisor,
            weights.shared_expertise,
        ),
        needs_met: weighted_overlap(
            overlap_count(&requester.needs, &candidate.expertise),
            divisor,
            weights.needs_met,
        ),
        needs_offered: weighted_overlap(
            overlap_count(&requester.expertise, &candidate.needs),
            divisor,
            weights.needs_offered,
        ),
    }
}
