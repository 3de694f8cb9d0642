use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use powerstats_core::error::AnalysisError;
use powerstats_core::models::{DrawingRecord, MAIN_PICK, Number};

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub main_column: String,
    pub powerball_column: String,
    pub delimiter: u8,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            main_column: "Main Numbers".to_string(),
            powerball_column: "Powerball".to_string(),
            delimiter: b',',
        }
    }
}

/// Découpe un champ « 1, 2, 3, 4, 5 ». Tout morceau non numérique est une erreur.
pub fn parse_main_numbers(field: &str) -> Result<Vec<Number>, String> {
    let numbers = field
        .split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<Number>()
                .map_err(|_| format!("numéro principal illisible : '{}'", s))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.len() < MAIN_PICK {
        return Err(format!(
            "{} numéro(s) principal(aux) au lieu de {} au moins",
            numbers.len(),
            MAIN_PICK
        ));
    }
    Ok(numbers)
}

fn parse_powerball(field: &str) -> Result<Number, String> {
    let s = field.trim();
    s.parse::<Number>()
        .map_err(|_| format!("powerball illisible : '{}'", s))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers.iter().position(|h| h.trim() == name) {
        Some(idx) => Ok(idx),
        None => bail!(
            "Colonne '{}' absente (colonnes disponibles : {})",
            name,
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    }
}

fn parse_record(
    record: &csv::StringRecord,
    line: usize,
    main_idx: usize,
    powerball_idx: usize,
) -> Result<DrawingRecord, AnalysisError> {
    let main_field = record
        .get(main_idx)
        .ok_or_else(|| AnalysisError::malformed(line, "champ des numéros principaux manquant"))?;
    let powerball_field = record
        .get(powerball_idx)
        .ok_or_else(|| AnalysisError::malformed(line, "champ powerball manquant"))?;

    let numbers =
        parse_main_numbers(main_field).map_err(|r| AnalysisError::malformed(line, r))?;
    let powerball =
        parse_powerball(powerball_field).map_err(|r| AnalysisError::malformed(line, r))?;

    DrawingRecord::from_slice(&numbers, powerball)
        .ok_or_else(|| AnalysisError::malformed(line, "moins de 5 numéros principaux"))
}

/// Lit tous les tirages ; la première ligne invalide interrompt la lecture.
/// Les lignes sont numérotées à partir de 1, en-tête exclu.
pub fn read_records<R: Read>(source: R, options: &ImportOptions) -> Result<Vec<DrawingRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers().context("Impossible de lire l'en-tête")?.clone();
    let main_idx = column_index(&headers, &options.main_column)?;
    let powerball_idx = column_index(&headers, &options.powerball_column)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let line = i + 1;
        let row = row.with_context(|| format!("Erreur lecture ligne {}", line))?;
        records.push(parse_record(&row, line, main_idx, powerball_idx)?);
    }

    log::debug!("{} tirages lus", records.len());
    Ok(records)
}

pub fn import_csv(path: &Path, options: &ImportOptions) -> Result<Vec<DrawingRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    read_records(file, options).with_context(|| format!("Import de {:?} interrompu", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Draw Date,Main Numbers,Powerball
2024-01-01,\"1, 2, 3, 4, 5\",10
2024-01-03,\"10,20,30,40,50,60\",26
";

    #[test]
    fn test_parse_main_numbers() {
        assert_eq!(parse_main_numbers("1,2,3,4,5").unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_main_numbers(" 7 , 8,9 ,10, 11 ").unwrap(), vec![7, 8, 9, 10, 11]);
        assert!(parse_main_numbers("1,2,3,4").is_err());
        assert!(parse_main_numbers("1,2,x,4,5").is_err());
        assert!(parse_main_numbers("").is_err());
    }

    #[test]
    fn test_read_records() {
        let records = read_records(SAMPLE.as_bytes(), &ImportOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], DrawingRecord::new([1, 2, 3, 4, 5], 10));
        assert_eq!(records[1].main_numbers, [10, 20, 30, 40, 50]);
        assert_eq!(records[1].powerball, 26);
    }

    #[test]
    fn test_malformed_row_aborts() {
        let data = "Main Numbers,Powerball\n\"1,2,3,4,5\",10\n\"1,2,3\",4\n\"6,7,8,9,10\",1\n";
        let err = read_records(data.as_bytes(), &ImportOptions::default()).unwrap_err();
        match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::MalformedRecord { line, .. }) => assert_eq!(*line, 2),
            other => panic!("attendu MalformedRecord, obtenu {:?}", other),
        }
    }

    #[test]
    fn test_bad_powerball() {
        let data = "Main Numbers,Powerball\n\"1,2,3,4,5\",PB\n";
        let err = read_records(data.as_bytes(), &ImportOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_negative_and_large_values_counted() {
        let data = "Main Numbers,Powerball\n\"1,2,3,4,5\",-3\n\"-6,7,8,9,5000000000\",4\n";
        let records = read_records(data.as_bytes(), &ImportOptions::default()).unwrap();
        assert_eq!(records[0].powerball, -3);
        assert_eq!(records[1].main_numbers, [-6, 7, 8, 9, 5_000_000_000]);
    }

    #[test]
    fn test_missing_column() {
        let data = "winning,pb\n\"1,2,3,4,5\",1\n";
        let err = read_records(data.as_bytes(), &ImportOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Main Numbers"));
    }

    #[test]
    fn test_custom_columns_and_delimiter() {
        let data = "Winning Numbers;Powerball\n1,2,3,4,5;7\n5,6,7,8,9;8\n";
        let options = ImportOptions {
            main_column: "Winning Numbers".to_string(),
            powerball_column: "Powerball".to_string(),
            delimiter: b';',
        };
        let records = read_records(data.as_bytes(), &options).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].powerball, 8);
    }

    #[test]
    fn test_import_csv_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let records = import_csv(file.path(), &ImportOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_import_csv_missing_file() {
        let result = import_csv(Path::new("/nonexistent/draws.csv"), &ImportOptions::default());
        assert!(result.is_err());
    }
}
