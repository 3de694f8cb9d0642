use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub hot_count: usize,
    pub cold_count: usize,
    pub powerball_hot_count: usize,
    pub powerball_cold_count: usize,
    /// Numéros retenus par position de tirage.
    pub positional_top: usize,
    pub top_pairs: usize,
    /// Demi-largeur de la plage d'écart conseillée autour de l'écart moyen.
    pub range_margin: f64,
    pub strict: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hot_count: 15,
            cold_count: 15,
            powerball_hot_count: 5,
            powerball_cold_count: 5,
            positional_top: 3,
            top_pairs: 10,
            range_margin: 5.0,
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.hot_count, 15);
        assert_eq!(config.powerball_hot_count, 5);
        assert_eq!(config.top_pairs, 10);
        assert!((config.range_margin - 5.0).abs() < 1e-10);
        assert!(!config.strict);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"hot_count": 10, "strict": true}"#).unwrap();
        assert_eq!(config.hot_count, 10);
        assert!(config.strict);
        assert_eq!(config.cold_count, 15);
        assert_eq!(config.positional_top, 3);
    }
}
