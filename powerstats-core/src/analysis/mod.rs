pub mod frequency;
pub mod pairs;
pub mod summary;
pub mod weights;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::models::{DrawingRecord, Number, Pool, validate_draw};

use self::frequency::{FrequencyTable, PositionalFrequencyTable, bottom_n, rank_frequencies, top_n};
use self::pairs::{Pair, pairwise_counts};
use self::summary::{SummaryStatistics, compute_summary};
use self::weights::compute_weights;

/// Compteurs bruts du premier passage.
#[derive(Debug, Clone, Default)]
pub struct Accumulation {
    pub main: FrequencyTable,
    pub positional: PositionalFrequencyTable,
    pub powerball: FrequencyTable,
    pub sums: Vec<i64>,
    pub ranges: Vec<i64>,
}

impl Accumulation {
    pub fn total_drawings(&self) -> usize {
        self.sums.len()
    }
}

/// Bornes conseillées, tronquées vers zéro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetRange {
    pub low: i64,
    pub high: i64,
}

impl TargetRange {
    fn around(center: f64, half_width: f64) -> Self {
        Self {
            low: (center - half_width) as i64,
            high: (center + half_width) as i64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub total_drawings: usize,
    pub main_weights: BTreeMap<Number, f64>,
    pub powerball_weights: BTreeMap<Number, f64>,
    pub sum_stats: SummaryStatistics,
    pub range_stats: SummaryStatistics,
    pub hot_main: Vec<(Number, u32)>,
    pub cold_main: Vec<(Number, u32)>,
    pub hot_powerball: Vec<(Number, u32)>,
    pub cold_powerball: Vec<(Number, u32)>,
    /// Index = position de tirage.
    pub positional_top: Vec<Vec<(Number, u32)>>,
    pub top_pairs: Vec<(Pair, u32)>,
    pub target_sum_range: TargetRange,
    pub target_number_range: TargetRange,
}

/// Premier passage : fréquences globales, par position, powerball, sommes et écarts.
pub fn accumulate(records: &[DrawingRecord]) -> Result<Accumulation, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut acc = Accumulation {
        sums: Vec::with_capacity(records.len()),
        ranges: Vec::with_capacity(records.len()),
        ..Default::default()
    };

    for record in records {
        for (position, &n) in Pool::Main.numbers_from(record).iter().enumerate() {
            acc.main.increment(n);
            acc.positional.increment(position, n);
        }
        for &n in Pool::Powerball.numbers_from(record) {
            acc.powerball.increment(n);
        }
        acc.sums.push(record.sum());
        acc.ranges.push(record.range());
    }

    for (pool, table) in [(Pool::Main, &acc.main), (Pool::Powerball, &acc.powerball)] {
        let domain = pool.domain();
        let outside = table.outside(*domain.start(), *domain.end());
        if !outside.is_empty() {
            log::warn!("{} : numéros hors limites comptés tels quels {:?}", pool, outside);
        }
    }
    let duplicated = records.iter().filter(|r| r.has_duplicates()).count();
    if duplicated > 0 {
        log::warn!("{} tirage(s) avec une boule en double, comptés tels quels", duplicated);
    }
    log::debug!("{} tirages accumulés", acc.total_drawings());

    Ok(acc)
}

/// Analyse complète d'un historique. Fonction pure : rien n'est conservé entre deux appels.
pub fn build_result(
    records: &[DrawingRecord],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    if config.strict {
        for (i, record) in records.iter().enumerate() {
            validate_draw(record, i + 1)?;
        }
    }

    let acc = accumulate(records)?;
    let total = acc.total_drawings();

    let sums: Vec<f64> = acc.sums.iter().map(|&s| s as f64).collect();
    let ranges: Vec<f64> = acc.ranges.iter().map(|&r| r as f64).collect();
    let sum_stats = compute_summary(&sums)?;
    let range_stats = compute_summary(&ranges)?;

    let main_domain = Pool::Main.domain();
    let (main_low, main_high) = (*main_domain.start(), *main_domain.end());
    let pb_domain = Pool::Powerball.domain();
    let (pb_low, pb_high) = (*pb_domain.start(), *pb_domain.end());

    let main_ranked = rank_frequencies(&acc.main, main_low, main_high);
    let pb_ranked = rank_frequencies(&acc.powerball, pb_low, pb_high);

    let positional_top = acc
        .positional
        .slots()
        .iter()
        .map(|slot| top_n(&slot.ranked_seen(), config.positional_top))
        .collect();

    let pairs = pairwise_counts(records);

    Ok(AnalysisResult {
        total_drawings: total,
        main_weights: compute_weights(&acc.main, main_low, main_high, total)?,
        powerball_weights: compute_weights(&acc.powerball, pb_low, pb_high, total)?,
        sum_stats,
        range_stats,
        hot_main: top_n(&main_ranked, config.hot_count),
        cold_main: bottom_n(&main_ranked, config.cold_count),
        hot_powerball: top_n(&pb_ranked, config.powerball_hot_count),
        cold_powerball: bottom_n(&pb_ranked, config.powerball_cold_count),
        positional_top,
        top_pairs: pairs.top(config.top_pairs),
        target_sum_range: TargetRange::around(sum_stats.mean, sum_stats.std_dev),
        target_number_range: TargetRange::around(range_stats.mean, config.range_margin),
    })
}
