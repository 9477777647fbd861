//! Weighted Shannon entropy over pattern frequencies

/// Shannon entropy of a distribution given by unnormalized weights
///
/// Computed from the running sums kept by wave cells:
/// `ln(Σw) - Σ(w·ln w) / Σw`. Returns `0.0` for an empty or non-positive
/// total, which is the entropy of a fully determined cell.
pub fn entropy_from_sums(weight_sum: f64, weight_log_weight_sum: f64) -> f64 {
    if weight_sum <= 0.0 {
        return 0.0;
    }
    weight_sum.ln() - weight_log_weight_sum / weight_sum
}

/// The `w·ln w` term contributed by one weight
pub fn weight_log_weight(weight: f64) -> f64 {
    if weight > 0.0 {
        weight * weight.ln()
    } else {
        0.0
    }
}

/// Shannon entropy of a slice of unnormalized weights
pub fn weighted_entropy(weights: &[f64]) -> f64 {
    let (sum, log_sum) = weights
        .iter()
        .fold((0.0, 0.0), |(sum, log_sum), &w| {
            (sum + w, log_sum + weight_log_weight(w))
        });
    entropy_from_sums(sum, log_sum)
}
