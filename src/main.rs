mod app;
mod color;
mod config;
mod data;
mod error;
mod layout;
mod selection;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::EegExplorerApp;
use clap::Parser;
use config::{ExplorerConfig, DEFAULT_MAX_CHANNELS};
use data::model::DEFAULT_SAMPLE_RATE;
use eframe::egui;
use state::AppState;

/// Tallest initial window; taller layouts scroll.
const MAX_WINDOW_HEIGHT: f32 = 1000.0;

#[derive(Parser)]
#[command(
    name = "eeg-explorer",
    version,
    about = "Interactive multi-channel EEG/ECG recording explorer"
)]
struct Cli {
    /// Recording to open: metadata preamble followed by a `Time,...` table.
    file: Option<PathBuf>,

    /// Maximum number of channel panels.
    #[arg(long, default_value_t = DEFAULT_MAX_CHANNELS)]
    max_channels: usize,

    /// Plot every channel, ignoring --max-channels.
    #[arg(long)]
    all_channels: bool,

    /// Sample rate assumed when the file does not state one.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,

    /// Print the panel layout as JSON and exit instead of opening a window.
    #[arg(long)]
    dump_spec: bool,

    /// Describe a selection payload such as '{"range":{"x":[1.0,2.5]}}' and exit.
    #[arg(long, value_name = "JSON")]
    selection: Option<String>,
}

impl Cli {
    fn config(&self) -> ExplorerConfig {
        ExplorerConfig {
            default_sample_rate: self.sample_rate,
            max_channels: (!self.all_channels).then_some(self.max_channels),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("\nEEG/ECG Multichannel Data Explorer");
    println!("{}", "=".repeat(35));

    if let Some(payload) = &cli.selection {
        let status = selection::describe_json(payload).context("parsing selection payload")?;
        println!("{status}");
        return Ok(());
    }

    let mut state = AppState::new(cli.config());

    match &cli.file {
        None => println!("No CSV file provided."),
        Some(path) if !path.exists() => {
            println!("Error: File '{}' not found!", path.display());
            return Ok(());
        }
        Some(path) => {
            println!("Loading {}...", path.display());
            if let Err(e) = state.open(path) {
                println!("Error: {e:#}");
                return Ok(());
            }
        }
    }

    if cli.dump_spec {
        let spec = state
            .plot_spec
            .as_ref()
            .context("--dump-spec needs a recording")?;
        println!("{}", serde_json::to_string_pretty(spec)?);
        return Ok(());
    }

    let height = state
        .plot_spec
        .as_ref()
        .map(|spec| (spec.height as f32).min(MAX_WINDOW_HEIGHT))
        .unwrap_or(800.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    println!("Opening plot window...");
    eframe::run_native(
        "EEG Explorer – Data Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(EegExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
