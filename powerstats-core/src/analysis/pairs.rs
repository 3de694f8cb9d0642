use std::collections::BTreeMap;

use crate::models::{DrawingRecord, Number};

pub type Pair = (Number, Number);

/// Co-occurrences de paires, clé normalisée (plus petit d'abord).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairFrequencyTable {
    counts: BTreeMap<Pair, u32>,
}

impl PairFrequencyTable {
    pub fn increment(&mut self, a: Number, b: Number) {
        *self.counts.entry(normalize(a, b)).or_insert(0) += 1;
    }

    pub fn count(&self, a: Number, b: Number) -> u32 {
        self.counts.get(&normalize(a, b)).copied().unwrap_or(0)
    }

    pub fn distinct_pairs(&self) -> usize {
        self.counts.len()
    }

    /// Compte décroissant ; à égalité, ordre naturel des paires.
    pub fn ranked(&self) -> Vec<(Pair, u32)> {
        let mut ranked: Vec<(Pair, u32)> =
            self.counts.iter().map(|(&p, &c)| (p, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(Pair, u32)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

fn normalize(a: Number, b: Number) -> Pair {
    if a <= b { (a, b) } else { (b, a) }
}

/// Second passage, indépendant du premier : les 10 paires de chaque tirage.
pub fn pairwise_counts(records: &[DrawingRecord]) -> PairFrequencyTable {
    let mut table = PairFrequencyTable::default();
    for record in records {
        let balls = &record.main_numbers;
        for i in 0..balls.len() {
            for j in (i + 1)..balls.len() {
                table.increment(balls[i], balls[j]);
            }
        }
    }
    log::debug!(
        "{} paires distinctes sur {} tirages",
        table.distinct_pairs(),
        records.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_pairs_per_record() {
        let records = vec![DrawingRecord::new([1, 2, 3, 4, 5], 1)];
        let table = pairwise_counts(&records);
        assert_eq!(table.distinct_pairs(), 10);
        assert!(table.ranked().iter().all(|(_, c)| *c == 1));
    }

    #[test]
    fn test_pair_symmetric() {
        let records = vec![
            DrawingRecord::new([7, 3, 10, 20, 30], 1),
            DrawingRecord::new([3, 7, 11, 21, 31], 1),
        ];
        let table = pairwise_counts(&records);
        assert_eq!(table.count(3, 7), 2);
        assert_eq!(table.count(7, 3), 2);
        assert_eq!(table.ranked()[0], ((3, 7), 2));
    }

    #[test]
    fn test_ranked_tie_break_natural_order() {
        let records = vec![
            DrawingRecord::new([5, 6, 40, 50, 60], 1),
            DrawingRecord::new([5, 6, 41, 51, 61], 1),
            DrawingRecord::new([1, 2, 42, 52, 62], 1),
            DrawingRecord::new([1, 2, 43, 53, 63], 1),
        ];
        let top = pairwise_counts(&records).top(3);
        assert_eq!(top[0], ((1, 2), 2));
        assert_eq!(top[1], ((5, 6), 2));
        assert_eq!(top[2], ((1, 42), 1));
    }

    #[test]
    fn test_top_beyond_length() {
        let records = vec![DrawingRecord::new([1, 2, 3, 4, 5], 1)];
        assert_eq!(pairwise_counts(&records).top(50).len(), 10);
    }
}
