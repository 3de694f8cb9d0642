use std::ops::RangeInclusive;

use crate::error::AnalysisError;

/// Numéro tiré. Tout entier est accepté ; les valeurs hors domaine sont comptées
/// telles quelles.
pub type Number = i64;

pub const MAIN_PICK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingRecord {
    /// Ordre de tirage, pas l'ordre trié.
    pub main_numbers: [Number; MAIN_PICK],
    pub powerball: Number,
}

impl DrawingRecord {
    pub fn new(main_numbers: [Number; MAIN_PICK], powerball: Number) -> Self {
        Self {
            main_numbers,
            powerball,
        }
    }

    /// Garde les 5 premiers numéros, ignore le reste. `None` s'il en manque.
    pub fn from_slice(numbers: &[Number], powerball: Number) -> Option<Self> {
        let main_numbers: [Number; MAIN_PICK] = numbers.get(..MAIN_PICK)?.try_into().ok()?;
        Some(Self::new(main_numbers, powerball))
    }

    pub fn sum(&self) -> i64 {
        self.main_numbers.iter().fold(0i64, |acc, &n| acc.saturating_add(n))
    }

    pub fn range(&self) -> i64 {
        let max = self.main_numbers.iter().copied().max().unwrap_or(0);
        let min = self.main_numbers.iter().copied().min().unwrap_or(0);
        max.saturating_sub(min)
    }

    pub fn has_duplicates(&self) -> bool {
        let balls = &self.main_numbers;
        (0..balls.len()).any(|i| balls[i + 1..].contains(&balls[i]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Main,
    Powerball,
}

impl Pool {
    pub fn size(&self) -> usize {
        match self {
            Pool::Main => 69,
            Pool::Powerball => 26,
        }
    }

    pub fn domain(&self) -> RangeInclusive<Number> {
        1..=self.size() as Number
    }

    pub fn numbers_from<'a>(&self, record: &'a DrawingRecord) -> &'a [Number] {
        match self {
            Pool::Main => &record.main_numbers,
            Pool::Powerball => std::slice::from_ref(&record.powerball),
        }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pool::Main => write!(f, "Boules (1-69)"),
            Pool::Powerball => write!(f, "Powerball (1-26)"),
        }
    }
}

/// Validation stricte, utilisée seulement quand la configuration le demande.
pub fn validate_draw(record: &DrawingRecord, line: usize) -> Result<(), AnalysisError> {
    let main_domain = Pool::Main.domain();
    for &n in &record.main_numbers {
        if !main_domain.contains(&n) {
            return Err(AnalysisError::malformed(
                line,
                format!("boule {} hors limites (1-69)", n),
            ));
        }
    }
    if !Pool::Powerball.domain().contains(&record.powerball) {
        return Err(AnalysisError::malformed(
            line,
            format!("powerball {} hors limites (1-26)", record.powerball),
        ));
    }
    let balls = &record.main_numbers;
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            if balls[i] == balls[j] {
                return Err(AnalysisError::malformed(
                    line,
                    format!("boule en double : {}", balls[i]),
                ));
            }
        }
    }
    Ok(())
}
