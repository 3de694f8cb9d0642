use std::collections::BTreeMap;

use crate::models::{MAIN_PICK, Number};

/// Compteur d'occurrences. Accepte n'importe quelle clé : le domaine n'intervient
/// qu'à la lecture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Number, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, number: Number) {
        *self.counts.entry(number).or_insert(0) += 1;
    }

    pub fn count(&self, number: Number) -> u32 {
        self.counts.get(&number).copied().unwrap_or(0)
    }

    /// Somme des comptes sur le domaine `low..=high`.
    pub fn total_over(&self, low: Number, high: Number) -> u32 {
        if low > high {
            return 0;
        }
        self.counts.range(low..=high).map(|(_, &c)| c).sum()
    }

    /// Clés effectivement vues, compte décroissant puis numéro croissant.
    pub fn ranked_seen(&self) -> Vec<(Number, u32)> {
        let mut ranked: Vec<(Number, u32)> = self.counts.iter().map(|(&n, &c)| (n, c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Clés vues hors de `low..=high`.
    pub fn outside(&self, low: Number, high: Number) -> Vec<Number> {
        self.counts
            .keys()
            .copied()
            .filter(|n| *n < low || *n > high)
            .collect()
    }
}

/// Une table par position de tirage (0..5).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalFrequencyTable {
    slots: [FrequencyTable; MAIN_PICK],
}

impl PositionalFrequencyTable {
    pub fn increment(&mut self, position: usize, number: Number) {
        self.slots[position].increment(number);
    }

    pub fn slot(&self, position: usize) -> &FrequencyTable {
        &self.slots[position]
    }

    pub fn slots(&self) -> &[FrequencyTable; MAIN_PICK] {
        &self.slots
    }
}

/// Tout le domaine `low..=high`, trié par compte décroissant. Le tri est stable
/// sur un domaine parcouru en ordre croissant : à égalité, le plus petit numéro
/// passe devant.
pub fn rank_frequencies(table: &FrequencyTable, low: Number, high: Number) -> Vec<(Number, u32)> {
    let mut ranked: Vec<(Number, u32)> = (low..=high).map(|n| (n, table.count(n))).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Les `n` premiers ; toute la liste si `n` la dépasse.
pub fn top_n<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    ranked[..n.min(ranked.len())].to_vec()
}

/// Les `n` derniers, dans l'ordre du classement.
pub fn bottom_n<T: Clone>(ranked: &[T], n: usize) -> Vec<T> {
    ranked[ranked.len().saturating_sub(n)..].to_vec()
}
