//! Command implementations for the weather odds CLI.
//!
//! Provides subcommands that query the remote odds service and print the
//! same view description the web dashboard draws, or save exports to disk.

use chrono::NaiveDate;
use clap::Subcommand;
use wxodds_core::export::ExportFormat;
use wxodds_core::metric::MetricId;
use wxodds_core::{ClientConfig, HttpClient};

pub mod check;
pub mod download;
pub mod text;

pub use wxodds_core::config::DEFAULT_SERVER;

#[derive(Subcommand)]
pub enum Command {
    /// Show extreme-weather odds for a city or pin on a date
    Check {
        /// City name (defaults to Karachi)
        #[arg(short, long, default_value = "")]
        city: String,

        /// Pin as "lat,lon"; takes precedence over the city
        #[arg(short, long, default_value = "")]
        pin: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Metric to show (repeatable): hot, cold, wet, windy, uncomfortable
        #[arg(short, long = "metric")]
        metrics: Vec<MetricId>,

        /// Print the view description as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Download the CSV or JSON export for a city and date
    Download {
        /// Export format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// City name (defaults to Karachi)
        #[arg(short, long, default_value = "")]
        city: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Directory to save the file into
        #[arg(short, long, default_value = ".")]
        out_dir: String,
    },
}

pub async fn run(server: &str, command: Command) -> anyhow::Result<()> {
    let client = HttpClient::new(ClientConfig::new(server));
    let today = chrono::Local::now().date_naive();
    match command {
        Command::Check {
            city,
            pin,
            date,
            metrics,
            json,
        } => {
            let date = date.unwrap_or(today);
            check::run_check(&client, &city, &pin, date, &metrics, json).await
        }
        Command::Download {
            format,
            city,
            date,
            out_dir,
        } => {
            let date = date.unwrap_or(today);
            download::run_download(&client, format, &city, date, &out_dir).await
        }
    }
}
