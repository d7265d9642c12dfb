use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::{error, info, info_span};

use shift_cli::render::{apply_table_style, render_table};
use shift_ingest::parse_file;
use shift_model::{SessionState, Table};
use shift_transform::TransformClient;

use crate::cli::{PreviewArgs, ProcessArgs, ServiceArgs};

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let span = info_span!("preview", file = %args.file.display());
    let _guard = span.enter();

    let mut session = SessionState::new();
    session.select_file(file_name(&args.file));

    let start = Instant::now();
    match parse_file(&args.file) {
        Ok(table) => {
            info!(
                headers = table.headers.len(),
                rows = table.rows.len(),
                duration_ms = start.elapsed().as_millis(),
                "parse complete"
            );
            session.parse_succeeded(table)?;
        }
        Err(cause) => {
            error!(%cause, "parse failed");
            session.fail(cause.to_string());
            return Err(cause.into());
        }
    }

    let table = session
        .table()
        .context("a parsed session holds its table")?;
    print!("{}", render_table(table, args.limit));
    Ok(())
}

pub async fn run_process(args: &ProcessArgs) -> Result<()> {
    let span = info_span!("process", file = %args.file.display());
    let _guard = span.enter();

    let mut session = SessionState::new();
    session.select_file(file_name(&args.file));

    let parse_start = Instant::now();
    match parse_file(&args.file) {
        Ok(table) => {
            info!(
                headers = table.headers.len(),
                rows = table.rows.len(),
                duration_ms = parse_start.elapsed().as_millis(),
                "parse complete"
            );
            session.parse_succeeded(table)?;
        }
        Err(cause) => {
            error!(%cause, "parse failed");
            session.fail(cause.to_string());
            return Err(cause.into());
        }
    }

    // The submit gate: a table with data rows and a non-blank instruction.
    session.submit(args.instruction.as_str())?;
    let table = session
        .table()
        .cloned()
        .context("a processing session holds its table")?;

    let client = TransformClient::with_timeout(
        &args.service.endpoint,
        Duration::from_secs(args.service.timeout),
    )?;
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Processing data with the transformation service...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let process_start = Instant::now();
    let outcome = client.process(&table, &args.instruction).await;
    spinner.finish_and_clear();

    match outcome {
        Ok((replacement, message)) => {
            info!(
                rows = replacement.rows.len(),
                duration_ms = process_start.elapsed().as_millis(),
                "processing complete"
            );
            session.process_succeeded(replacement)?;
            if let Some(message) = message {
                println!("{message}");
            }
            let processed = session
                .table()
                .context("a processed session holds its table")?;
            print!("{}", render_table(processed, args.limit));
            if let Some(path) = &args.output {
                export_csv(processed, path)?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
        Err(cause) => {
            error!(%cause, "processing failed");
            session.fail(cause.to_string());
            Err(cause.into())
        }
    }
}

pub fn run_formats() -> Result<()> {
    let mut grid = comfy_table::Table::new();
    grid.set_header(vec!["Suffix", "Source shape", "Decoding mode"]);
    apply_table_style(&mut grid);
    grid.add_row(vec![
        ".csv",
        "delimited text",
        "header row, then one record per line",
    ]);
    grid.add_row(vec![
        ".xlsx",
        "zip-packaged workbook",
        "first sheet only, cells coerced to text",
    ]);
    grid.add_row(vec![
        ".xls",
        "legacy binary workbook",
        "first sheet only, cells coerced to text",
    ]);
    println!("{grid}");
    Ok(())
}

pub async fn run_health(args: &ServiceArgs) -> Result<()> {
    let client = TransformClient::with_timeout(&args.endpoint, Duration::from_secs(args.timeout))?;
    client
        .health()
        .await
        .with_context(|| format!("health check against {}", client.base_url()))?;
    println!("Transformation service at {} is healthy.", client.base_url());
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

fn export_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .context("write header row")?;
    for row in &table.rows {
        let record: Vec<&str> = table
            .headers
            .iter()
            .map(|header| row.get(header).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&record).context("write data row")?;
    }
    writer.flush().context("flush csv output")?;
    Ok(())
}
