use std::collections::BTreeMap;

use crate::analysis::frequency::FrequencyTable;
use crate::error::AnalysisError;
use crate::models::Number;

/// Poids de sélection `1 + 2 * fréquence / tirages` pour chaque numéro du domaine.
pub fn compute_weights(
    table: &FrequencyTable,
    low: Number,
    high: Number,
    total_drawings: usize,
) -> Result<BTreeMap<Number, f64>, AnalysisError> {
    if total_drawings == 0 {
        return Err(AnalysisError::EmptyDataset);
    }
    let total = total_drawings as f64;
    Ok((low..=high)
        .map(|n| (n, 1.0 + (table.count(n) as f64 / total) * 2.0))
        .collect())
}
