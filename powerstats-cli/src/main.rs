mod display;
mod import;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use powerstats_core::analysis::{AnalysisResult, build_result};
use powerstats_core::config::AnalysisConfig;

use crate::display::{display_import_summary, display_report, display_weights};
use crate::import::{ImportOptions, import_csv};

#[derive(Parser)]
#[command(name = "powerstats", about = "Statistiques descriptives des tirages Powerball")]
struct Cli {
    /// Fichier JSON de configuration de l'analyse
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rejeter les numéros hors limites ou en double
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Chemin vers le fichier CSV des tirages
    #[arg(short, long, default_value = "assets/powerball.csv")]
    file: PathBuf,

    /// Colonne des 5 numéros principaux
    #[arg(long, default_value = "Main Numbers")]
    main_column: String,

    /// Colonne du powerball
    #[arg(long, default_value = "Powerball")]
    powerball_column: String,

    /// Séparateur de champs du CSV
    #[arg(long, default_value = ",")]
    delimiter: char,
}

impl Input {
    fn options(&self) -> Result<ImportOptions> {
        if !self.delimiter.is_ascii() {
            bail!("Séparateur non ASCII : '{}'", self.delimiter);
        }
        Ok(ImportOptions {
            main_column: self.main_column.clone(),
            powerball_column: self.powerball_column.clone(),
            delimiter: self.delimiter as u8,
        })
    }
}

#[derive(Subcommand)]
enum Command {
    /// Rapport complet : sommes, écarts, chauds/froids, positions, paires
    Report {
        #[command(flatten)]
        input: Input,
    },

    /// Afficher les poids de sélection de chaque numéro
    Weights {
        #[command(flatten)]
        input: Input,
    },

    /// Exporter l'analyse en JSON
    Export {
        #[command(flatten)]
        input: Input,

        /// Fichier de sortie (stdout par défaut)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.strict {
        config.strict = true;
    }

    match cli.command {
        Command::Report { input } => {
            let result = analyze(&input, &config)?;
            display_report(&result);
        }
        Command::Weights { input } => {
            let result = analyze(&input, &config)?;
            display_weights(&result);
        }
        Command::Export { input, output } => {
            let result = analyze(&input, &config)?;
            cmd_export(&result, output.as_deref())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let config: AnalysisConfig = serde_json::from_str(&json)
        .with_context(|| format!("JSON invalide dans {:?}", path))?;
    log::info!("Configuration chargée depuis {:?}", path);
    Ok(config)
}

fn analyze(input: &Input, config: &AnalysisConfig) -> Result<AnalysisResult> {
    let records = import_csv(&input.file, &input.options()?)?;
    display_import_summary(&input.file, records.len());
    let result = build_result(&records, config).context("Analyse impossible")?;
    Ok(result)
}

fn cmd_export(result: &AnalysisResult, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Impossible d'écrire {:?}", path))?;
            eprintln!("Analyse exportée dans {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
