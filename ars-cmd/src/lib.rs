//! Command implementations for ARS CLI.
//!
//! Provides subcommands for rendering the dashboard page, dumping the chart
//! descriptions as JSON and exporting the annual exceedance table.

use ars_chart::dashboard::{ChartKind, Selection};
use ars_dataset::schema::DEFAULT_INPUT;
use ars_dataset::Dataset;
use anyhow::Context;
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, Write};

pub mod annual;
pub mod charts;
pub mod render;

/// The chart checkboxes.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartToggles {
    /// Build the arsenic histogram
    #[arg(long)]
    pub histogram: bool,

    /// Build the arsenic-over-time scatter chart
    #[arg(long)]
    pub scatter: bool,

    /// Build the annual exceedance bar chart
    #[arg(long)]
    pub bars: bool,

    /// Build all three charts
    #[arg(long)]
    pub all: bool,
}

impl ChartToggles {
    pub fn selection(&self) -> Selection {
        if self.all {
            return Selection::all();
        }
        Selection::from_flags(self.histogram, self.scatter, self.bars)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dashboard as a self-contained HTML page
    Render {
        /// Path to the cleaned sample table (.parquet or .csv)
        #[arg(short = 'i', long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Output path for the HTML page
        #[arg(short = 'o', long, default_value = "arsenico.html")]
        output: String,

        #[command(flatten)]
        toggles: ChartToggles,
    },

    /// Print the selected chart descriptions as JSON
    Charts {
        /// Path to the cleaned sample table (.parquet or .csv)
        #[arg(short = 'i', long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Output path for the JSON (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        #[command(flatten)]
        toggles: ChartToggles,
    },

    /// Write the annual exceedance table as CSV
    Annual {
        /// Path to the cleaned sample table (.parquet or .csv)
        #[arg(short = 'i', long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Output path for the CSV (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            input,
            output,
            toggles,
        } => render::run_render(&input, &output, &toggles.selection()),
        Command::Charts {
            input,
            output,
            toggles,
        } => charts::run_charts(&input, output.as_deref(), &toggles.selection()),
        Command::Annual { input, output } => annual::run_annual(&input, output.as_deref()),
    }
}

/// Load the sample table and log what was found in it.
pub(crate) fn load_dataset(input: &str) -> anyhow::Result<Dataset> {
    let dataset = Dataset::load(input).with_context(|| format!("Failed to load samples from {}", input))?;
    let summary = dataset.summary();
    log::info!(
        "Loaded {} samples from {} (years {:?}..={:?}, types {:?})",
        summary.rows,
        input,
        summary.first_year,
        summary.last_year,
        summary.water_body_labels()
    );
    if summary.missing_concentration > 0 || summary.missing_water_body_type > 0 {
        log::debug!(
            "{} samples without concentration, {} without water body type",
            summary.missing_concentration,
            summary.missing_water_body_type
        );
    }
    Ok(dataset)
}

/// Open `path` for writing, or stdout when no path is given.
pub(crate) fn output_writer(path: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    })
}

/// Names of the selected charts, for log lines.
pub(crate) fn selection_names(selection: &Selection) -> Vec<&'static str> {
    selection.kinds().map(|k: ChartKind| k.slug()).collect()
}
