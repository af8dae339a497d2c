// Unit tests for the matchmaking scorer

use community_matchmaker::core::{
    overlap::overlap_count,
    scoring::{calculate_match_score, score_breakdown},
};
use community_matchmaker::models::{Profile, ScoringWeights};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn profile(id: &str, expertise: &[&str], needs: &[&str], asset_types: &[&str], markets: &[&str]) -> Profile {
    Profile {
        id: id.to_string(),
        name: format!("Member {}", id),
        profile_type: "developer".to_string(),
        avatar_url: None,
        expertise: tags(expertise),
        needs: tags(needs),
        asset_types: tags(asset_types),
        markets: tags(markets),
    }
}

#[test]
fn test_concrete_scenario() {
    let requester = profile("me", &["Design"], &["Capital"], &["Retail"], &["Northeast"]);
    let candidate = profile("x", &["Capital", "Design"], &[], &["Retail"], &["Northeast"]);

    let score = calculate_match_score(&requester, &candidate, &ScoringWeights::default());

    let expected = 0.20 / 3.0 + 0.15 / 3.0 + 0.10 / 3.0 + 0.40 / 3.0;
    assert!((score - expected).abs() < 1e-9, "got {}", score);
    assert!((score - 0.2833).abs() < 1e-3);
}

#[test]
fn test_score_is_directional() {
    let a = profile("a", &[], &["x"], &[], &[]);
    let b = profile("b", &["x"], &[], &[], &[]);
    let weights = ScoringWeights::default();

    let a_to_b = calculate_match_score(&a, &b, &weights);
    let b_to_a = calculate_match_score(&b, &a, &weights);

    // A's need met by B is the 0.40 term, B solving A's need from B's side is the 0.15 term
    assert!((a_to_b - 0.40 / 3.0).abs() < 1e-12);
    assert!((b_to_a - 0.15 / 3.0).abs() < 1e-12);
    assert_ne!(a_to_b, b_to_a);
}

#[test]
fn test_disjoint_profiles_score_zero() {
    let a = profile("a", &["Design", "Legal"], &["Capital"], &["Retail"], &["Northeast"]);
    let b = profile("b", &["Construction"], &["Marketing"], &["Industrial"], &["West"]);
    let weights = ScoringWeights::default();

    assert_eq!(calculate_match_score(&a, &b, &weights), 0.0);
    assert_eq!(calculate_match_score(&b, &a, &weights), 0.0);
}

#[test]
fn test_empty_tag_sets_score_zero() {
    let a = profile("a", &[], &[], &[], &[]);
    let b = profile("b", &["Design"], &["Capital"], &["Retail"], &["Northeast"]);

    assert_eq!(calculate_match_score(&a, &b, &ScoringWeights::default()), 0.0);
}

#[test]
fn test_duplicate_tags_count_once() {
    let requester = profile("me", &[], &["Capital", "Capital"], &[], &[]);
    let single = profile("x", &["Capital"], &[], &[], &[]);
    let doubled = profile("y", &["Capital", "Capital", "Capital"], &[], &[], &[]);
    let weights = ScoringWeights::default();

    assert_eq!(
        calculate_match_score(&requester, &single, &weights),
        calculate_match_score(&requester, &doubled, &weights)
    );
}

#[test]
fn test_scores_are_not_clamped() {
    let needs: Vec<String> = (0..6).map(|i| format!("need-{}", i)).collect();
    let needs_ref: Vec<&str> = needs.iter().map(String::as_str).collect();

    let requester = profile("me", &[], &needs_ref, &[], &[]);
    let candidate = profile("x", &needs_ref, &[], &[], &[]);

    let breakdown = score_breakdown(&requester, &candidate, &ScoringWeights::default());

    // Six shared tags against a divisor of three doubles the term's weight
    assert!((breakdown.needs_met - 0.80).abs() < 1e-12);
    assert!(breakdown.total() > 0.40);
}

#[test]
fn test_perfect_match_saturates_at_one() {
    let three = ["a", "b", "c"];
    let requester = profile("me", &three, &three, &three, &three);
    let candidate = profile("x", &three, &three, &three, &three);

    let score = calculate_match_score(&requester, &candidate, &ScoringWeights::default());

    assert!((score - 1.0).abs() < 1e-12, "got {}", score);
}

#[test]
fn test_overlap_count_is_set_based() {
    assert_eq!(overlap_count(&tags(&["a", "a", "b"]), &tags(&["b", "a", "a"])), 2);
}
