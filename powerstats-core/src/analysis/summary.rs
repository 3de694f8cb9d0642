use serde::Serialize;

use crate::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub median: f64,
    /// Écart-type d'échantillon (dénominateur n - 1).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn compute_summary(values: &[f64]) -> Result<SummaryStatistics, AnalysisError> {
    match values.len() {
        0 => return Err(AnalysisError::EmptyDataset),
        1 => return Err(AnalysisError::InsufficientSampleSize { count: 1 }),
        _ => {}
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    Ok(SummaryStatistics {
        mean,
        median,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_series() {
        let stats = compute_summary(&[15.0, 15.0]).unwrap();
        assert!((stats.mean - 15.0).abs() < 1e-10);
        assert!((stats.median - 15.0).abs() < 1e-10);
        assert!(stats.std_dev.abs() < 1e-10);
        assert_eq!(stats.min, 15.0);
        assert_eq!(stats.max, 15.0);
    }

    #[test]
    fn test_sample_std_dev() {
        // Variance d'échantillon de 2,4,4,4,5,5,7,9 = 32/7
        let stats = compute_summary(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-10);
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-10);
        assert!((stats.median - 4.5).abs() < 1e-10);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_odd_median_unsorted_input() {
        let stats = compute_summary(&[9.0, 1.0, 5.0]).unwrap();
        assert!((stats.median - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_value_fails() {
        assert_eq!(
            compute_summary(&[150.0]),
            Err(AnalysisError::InsufficientSampleSize { count: 1 })
        );
    }

    #[test]
    fn test_empty_fails() {
        assert_eq!(compute_summary(&[]), Err(AnalysisError::EmptyDataset));
    }
}
