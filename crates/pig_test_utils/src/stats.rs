//! Frequency statistics for randomness checks.

/// Occurrences of each face `1..=6` in `faces`.
///
/// # Panics
///
/// Panics on a face outside `1..=6`.
pub fn face_counts(faces: impl IntoIterator<Item = u8>) -> [u64; 6] {
    let mut counts = [0u64; 6];
    for face in faces {
        assert!((1..=6).contains(&face), "not a die face: {face}");
        counts[(face - 1) as usize] += 1;
    }
    counts
}

/// Pearson chi-squared statistic against a uniform distribution.
pub fn chi_squared_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 || counts.is_empty() {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Chi-squared critical value for 5 degrees of freedom at p = 0.001.
pub const CHI_SQUARED_5DF_P001: f64 = 20.515;

/// Largest relative deviation of any count from the uniform expectation.
pub fn max_relative_deviation(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 || counts.is_empty() {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| (c as f64 - expected).abs() / expected)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfectly_uniform_counts() {
        let counts = face_counts((1..=6).cycle().take(600));
        assert_eq!(counts, [100; 6]);
        assert_eq!(chi_squared_uniform(&counts), 0.0);
        assert_eq!(max_relative_deviation(&counts), 0.0);
    }

    #[test]
    fn test_skewed_counts_fail_uniformity() {
        let counts = [600, 0, 0, 0, 0, 0];
        assert!(chi_squared_uniform(&counts) > CHI_SQUARED_5DF_P001);
        assert!((max_relative_deviation(&counts) - 5.0).abs() < 1e-9);
    }
}
