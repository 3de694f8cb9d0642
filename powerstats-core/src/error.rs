use thiserror::Error;

/// Erreurs terminales d'une analyse : aucune reprise possible, le jeu de
/// données doit être corrigé.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Ligne {line} invalide : {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Aucun tirage à analyser")]
    EmptyDataset,

    #[error("Échantillon insuffisant ({count} tirage(s)) : au moins 2 tirages requis")]
    InsufficientSampleSize { count: usize },
}

impl AnalysisError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
