use anyhow::{Context, Result};
use slb_roi::{source, PipelineConfig};
use std::{
    env,
    io::{self, Write},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout carries the series, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // ─── 2) args ─────────────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let data_path = args
        .next()
        .context("Usage: slb-roi <DATA_JSON> [CONFIG_YAML]")?;
    let cfg = match args.next() {
        Some(path) => PipelineConfig::from_yaml_file(&path)?,
        None => PipelineConfig::default(),
    };
    info!(
        data = %data_path,
        reconstruct_total_years = ?cfg.reconstruct_total_years,
        overwrite_supplied = cfg.overwrite_supplied,
        "startup"
    );

    // ─── 3) load + derive ────────────────────────────────────────────
    let outcome = source::load_years_from_file(&data_path, &cfg)?;

    // ─── 4) emit ─────────────────────────────────────────────────────
    let summary = outcome.rows.summary();
    info!(
        total_revenue_mm = summary.total_revenue_mm,
        total_spend_mm = summary.total_spend_mm,
        roi_per_dollar = ?summary.roi_per_dollar,
        "program summary"
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &outcome.rows).context("writing series")?;
    writeln!(stdout)?;
    Ok(())
}
