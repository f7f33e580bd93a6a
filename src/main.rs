use anyhow::Result;
use aqcheck::{
    check_dataset_integrity,
    config::{Config, OutputFormat},
    report::{render_json, render_table},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,aqcheck=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::parse();
    let files = config.files()?;
    info!(files = files.len(), "checking");

    // ─── 3) check, one file at a time ────────────────────────────────
    let report = check_dataset_integrity(&files);

    // ─── 4) print; issues never change the exit status ───────────────
    match config.format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
