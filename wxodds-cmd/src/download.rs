//! `download` subcommand.

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use std::path::{Path, PathBuf};
use wxodds_core::client::{fetch_export, WeatherApi};
use wxodds_core::error::DOWNLOAD_UNAVAILABLE;
use wxodds_core::export::{ExportFile, ExportFormat};
use wxodds_core::query::Query;

/// Download an export and write it to `out_dir`.
pub async fn run_download<A: WeatherApi + ?Sized>(
    client: &A,
    format: ExportFormat,
    city: &str,
    date: NaiveDate,
    out_dir: &str,
) -> anyhow::Result<()> {
    let request = Query::from_inputs(city, "", date, Vec::new()).to_export_request();
    let file = fetch_export(client, format, &request)
        .await
        .context(DOWNLOAD_UNAVAILABLE)?;
    let path = save_export(Path::new(out_dir), &file)?;
    info!("Saved {} export to {}", format, path.display());
    println!("{}", path.display());
    Ok(())
}

/// Write an export file under `dir`, returning its path.
pub fn save_export(dir: &Path, file: &ExportFile) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
