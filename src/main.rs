// src/main.rs
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use eframe::egui;
use rfd::FileDialog;

mod analysis;
mod app;
mod config;
mod file;
mod input;
mod logging;
mod state;
mod ui;
mod view;

use crate::analysis::Dataset;
use crate::app::ScrapDashboardApp;
use crate::config::Settings;
use crate::file::RecordFileHandler;

#[derive(Parser, Debug)]
#[command(version, about = "Scrap records dashboard")]
struct Cli {
    /// CSV file with the scrap records
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Settings file (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of bars in each baseline chart
    #[arg(long)]
    top_n: Option<usize>,

    /// Rows per page in the records table
    #[arg(long)]
    page_size: Option<usize>,

    /// Choose the dataset with a file dialog
    #[arg(long)]
    pick_dataset: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.dataset {
            settings.dataset_path = path.clone();
        }
        if let Some(top_n) = self.top_n {
            settings.top_n = top_n;
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
    }
}

/// Settings from every layer, command line last, validated once at the end.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply(&mut settings);
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

/// The configured dataset, or one chosen in a file dialog with
/// `--pick-dataset`. A missing file is fatal.
fn resolve_dataset_path(settings: &Settings, pick: bool) -> Result<PathBuf> {
    if pick {
        return FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Open Scrap Records")
            .pick_file()
            .ok_or_else(|| anyhow!("No dataset selected"));
    }

    if !settings.dataset_path.is_file() {
        bail!("Dataset not found: {}", settings.dataset_path.display());
    }
    Ok(settings.dataset_path.clone())
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;

    let dataset_path = resolve_dataset_path(&settings, cli.pick_dataset)?;
    let table = RecordFileHandler::new()
        .load(&dataset_path)
        .with_context(|| format!("Failed to load dataset from {}", dataset_path.display()))?;
    let dataset = Arc::new(Dataset::new(table, settings.top_n)?);

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(ScrapDashboardApp::new(dataset, settings))),
    ).map_err(|e| anyhow!("Failed to run application: {}", e))
}
