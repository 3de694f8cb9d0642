use std::path::Path;

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use powerstats_core::analysis::pairs::Pair;
use powerstats_core::analysis::summary::SummaryStatistics;
use powerstats_core::analysis::AnalysisResult;
use powerstats_core::models::{Number, Pool};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn format_numbers(ranked: &[(Number, u32)]) -> String {
    ranked
        .iter()
        .map(|(n, c)| format!("{:2} ({})", n, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sur stderr, pour ne pas polluer l'export JSON.
pub fn display_import_summary(path: &Path, count: usize) {
    eprintln!("{} tirages lus depuis {}", count, path.display());
}

pub fn display_report(result: &AnalysisResult) {
    println!("\n📊 Analyse de {} tirages\n", result.total_drawings);

    println!("── Sommes et écarts ──");
    let mut table = new_table(vec!["Série", "Moyenne", "Médiane", "Écart-type", "Min", "Max"]);
    add_summary_row(&mut table, "Somme des boules", &result.sum_stats);
    add_summary_row(&mut table, "Écart max - min", &result.range_stats);
    println!("{table}");

    println!(
        "  Somme conseillée : {} - {}",
        result.target_sum_range.low, result.target_sum_range.high
    );
    println!(
        "  Écart conseillé  : {} - {}",
        result.target_number_range.low, result.target_number_range.high
    );

    println!("\n── Boules chaudes / froides ──");
    display_hot_cold(&result.hot_main, &result.cold_main);

    println!("\n── Powerball chauds / froids ──");
    display_hot_cold(&result.hot_powerball, &result.cold_powerball);

    println!("\n── Fréquences par position ──");
    let mut table = new_table(vec!["Position", "Plus fréquents"]);
    for (i, top) in result.positional_top.iter().enumerate() {
        table.add_row(vec![format!("{}", i + 1), format_numbers(top)]);
    }
    println!("{table}");

    println!("\n── Paires les plus fréquentes ──");
    display_pairs(&result.top_pairs);
}

fn add_summary_row(table: &mut Table, label: &str, stats: &SummaryStatistics) {
    table.add_row(vec![
        label.to_string(),
        format!("{:.2}", stats.mean),
        format!("{:.1}", stats.median),
        format!("{:.2}", stats.std_dev),
        format!("{}", stats.min),
        format!("{}", stats.max),
    ]);
}

fn display_hot_cold(hot: &[(Number, u32)], cold: &[(Number, u32)]) {
    let mut table = new_table(vec!["Rang", "Chaud", "Fréq.", "Froid", "Fréq."]);
    let rows = hot.len().max(cold.len());
    for i in 0..rows {
        let (hot_n, hot_c) = cell_pair(hot.get(i));
        let (cold_n, cold_c) = cell_pair(cold.get(i));
        table.add_row(vec![
            Cell::new(i + 1),
            hot_n.fg(Color::Green),
            hot_c,
            cold_n.fg(Color::Red),
            cold_c,
        ]);
    }
    println!("{table}");
}

fn cell_pair(entry: Option<&(Number, u32)>) -> (Cell, Cell) {
    match entry {
        Some((n, c)) => (Cell::new(format!("{:2}", n)), Cell::new(c)),
        None => (Cell::new(""), Cell::new("")),
    }
}

fn display_pairs(pairs: &[(Pair, u32)]) {
    let mut table = new_table(vec!["#", "Paire", "Tirages"]);
    for (i, ((a, b), count)) in pairs.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            format!("{:2} - {:2}", a, b),
            count.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn display_weights(result: &AnalysisResult) {
    println!("\n⚖️  Poids de sélection ({} tirages)\n", result.total_drawings);

    println!("── {} ──", Pool::Main);
    let mut table = new_table(vec!["Numéro", "Poids"]);
    for (n, w) in &result.main_weights {
        table.add_row(vec![format!("{:2}", n), format!("{:.4}", w)]);
    }
    println!("{table}");

    println!("\n── {} ──", Pool::Powerball);
    let mut table = new_table(vec!["Numéro", "Poids"]);
    for (n, w) in &result.powerball_weights {
        table.add_row(vec![format!("{:2}", n), format!("{:.4}", w)]);
    }
    println!("{table}");
}
