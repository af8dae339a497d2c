use std::collections::HashSet;

/// Count the distinct tags present in both lists
///
/// Duplicates within either list are counted once. Comparison is exact
/// string equality.
///
/// # Arguments
/// * `a` - Tags on the requester side
/// * `b` - Tags on the candidate side
///
/// # Returns
/// Size of the intersection of the two tag sets
#[inline]
pub fn overlap_count(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let left: HashSet<&str> = a.iter().map(String::as_str).collect();
    let right: HashSet<&str> = b.iter().map(String::as_str).collect();

    left.intersection(&right).count()
}

/// Weighted contribution of one overlap term
///
/// A non-positive divisor contributes nothing instead of dividing by zero.
#[inline]
pub fn weighted_overlap(count: usize, divisor: f64, weight: f64) -> f64 {
    if divisor <= 0.0 {
        return 0.0;
    }

    (count as f64 / divisor) * weight
}
