mod app;
mod data;
mod error;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::ScoutboardApp;
use data::model::PlayerTable;
use state::AppState;

/// Interactive dashboard over pre-computed football player market values.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file with the player predictions (ISO-8859-1 encoded).
    #[arg(long, default_value = "final_predictions_by_position.csv")]
    data: PathBuf,

    /// Where "Download Filtered Data as CSV" writes its output.
    #[arg(long, default_value = "filtered_players.csv")]
    export: PathBuf,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    // A dataset that fails to load is fatal: the UI has nothing to show.
    let table = match load_dataset(&args.data) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Scoutboard – Football Player Analysis",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ScoutboardApp::new(AppState::new(
                table,
                args.export,
            ))))
        }),
    )
}

fn load_dataset(path: &Path) -> anyhow::Result<PlayerTable> {
    let table = data::loader::load_table(path)
        .with_context(|| format!("cannot load player data from {}", path.display()))?;
    log::info!(
        "loaded {} players from {} (columns: {})",
        table.len(),
        path.display(),
        table.columns.join(", ")
    );
    Ok(table)
}
