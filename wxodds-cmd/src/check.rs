//! `check` subcommand.

use crate::text;
use chrono::NaiveDate;
use log::info;
use wxodds_core::dashboard;
use wxodds_core::metric::MetricId;
use wxodds_core::{CheckOutcome, Dashboard, HttpClient};

/// Run one check and print the report.
pub async fn run_check(
    client: &HttpClient,
    city: &str,
    pin: &str,
    date: NaiveDate,
    metrics: &[MetricId],
    json: bool,
) -> anyhow::Result<()> {
    let mut dash = Dashboard::new(date);
    dash.inputs.city = city.to_string();
    dash.inputs.pin = pin.to_string();
    for metric in metrics {
        dash.inputs.set_metric(*metric, true);
    }

    info!("Checking odds at {}", client.config().base_url);
    match dashboard::run_check(&mut dash, client).await {
        CheckOutcome::Rendered => {}
        CheckOutcome::Failed { alert } => anyhow::bail!(alert),
        CheckOutcome::Superseded => anyhow::bail!("check was superseded"),
    }

    let report = dash
        .report()
        .ok_or_else(|| anyhow::anyhow!("no report after a successful check"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&dash.view())?);
    } else {
        print!("{}", text::report_text(report));
    }
    Ok(())
}
