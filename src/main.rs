use analytics::AnalyticsEngine;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::OutputFormat;
use core_types::SalesDataset;
use loader::LoadOptions;
use serde::Serialize;
use std::path::PathBuf;

mod render;

use render::Renderer;

/// The main entry point for the Sales Tracker application.
fn main() -> Result<()> {
    // Environment overrides (SALES_*) may live in a .env file.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let path = cli
        .file
        .clone()
        .or_else(|| config.data.default_file.clone())
        .context("No sales file given. Pass --file or set data.default_file in config.toml")?;
    let options = LoadOptions {
        sheet: cli.sheet.clone().or_else(|| config.data.sheet.clone()),
    };

    let dataset = loader::load_sales_data(&path, &options)
        .with_context(|| format!("Failed to load sales data from {}", path.display()))?;

    let output = Output {
        format: cli.format.unwrap_or(config.display.format),
        renderer: Renderer::new(config.display.precision),
    };
    let engine = AnalyticsEngine::new();

    match cli.command {
        Commands::Analyze => handle_analyze(&engine, &dataset, &output),
        Commands::Product(args) => handle_product(&engine, &dataset, &output, args),
        Commands::Growth(args) => handle_growth(&engine, &dataset, &output, args),
        Commands::Weekly => handle_weekly(&engine, &dataset, &output),
        Commands::Export(args) => handle_export(&engine, &dataset, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Weekly sales statistics from a CSV file or spreadsheet.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a configuration file. Defaults to `config.toml` in the working directory, if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// The sales table to analyze (.csv, .xlsx, .xlsm, .xls or .ods).
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Worksheet to read from a workbook (default: the first sheet).
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Print tables or JSON. Overrides `display.format`.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total sales per product and the best-selling product.
    Analyze,
    /// Show weekly sales and growth for a single product.
    Product(ProductArgs),
    /// Show week-over-week growth for every product.
    Growth(GrowthArgs),
    /// Show total sales per week across all products.
    Weekly,
    /// Write the summary and growth reports to a JSON file.
    Export(ExportArgs),
}

#[derive(Parser)]
struct ProductArgs {
    /// The product name, exactly as it appears in the header row.
    name: String,
}

#[derive(Parser)]
struct GrowthArgs {
    /// Show percentage growth instead of absolute differences.
    #[arg(long)]
    percent: bool,
}

#[derive(Parser)]
struct ExportArgs {
    /// The output file path for the JSON report.
    #[arg(long, short)]
    output: PathBuf,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

struct Output {
    format: OutputFormat,
    renderer: Renderer,
}

impl Output {
    /// Prints either the rendered text or the report as pretty JSON.
    fn emit<T: Serialize>(&self, report: &T, render: impl FnOnce(&Renderer) -> String) -> Result<()> {
        match self.format {
            OutputFormat::Table => println!("{}", render(&self.renderer)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        }
        Ok(())
    }
}

fn handle_analyze(engine: &AnalyticsEngine, dataset: &SalesDataset, output: &Output) -> Result<()> {
    let report = engine.summarize(dataset)?;
    output.emit(&report, |r| r.summary(&report))
}

fn handle_product(
    engine: &AnalyticsEngine,
    dataset: &SalesDataset,
    output: &Output,
    args: ProductArgs,
) -> Result<()> {
    let report = engine.product(dataset, &args.name).with_context(|| {
        format!("Product lookup failed. Known products: {}", dataset.product_names().join(", "))
    })?;
    output.emit(&report, |r| r.product(&report))
}

fn handle_growth(
    engine: &AnalyticsEngine,
    dataset: &SalesDataset,
    output: &Output,
    args: GrowthArgs,
) -> Result<()> {
    let report = engine.growth(dataset);
    output.emit(&report, |r| r.growth(&report, args.percent))
}

fn handle_weekly(engine: &AnalyticsEngine, dataset: &SalesDataset, output: &Output) -> Result<()> {
    let report = engine.summarize(dataset)?;
    output.emit(&report.weekly_totals, |r| r.weekly(&report))
}

/// The document written by `export`. Chart tools read `summary.product_totals`
/// and `summary.weekly_totals`.
#[derive(Serialize)]
struct ExportDocument {
    summary: analytics::SalesReport,
    growth: analytics::GrowthReport,
}

fn handle_export(engine: &AnalyticsEngine, dataset: &SalesDataset, args: ExportArgs) -> Result<()> {
    let document = ExportDocument {
        summary: engine.summarize(dataset)?,
        growth: engine.growth(dataset),
    };

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), "Report exported.");
    println!("Report written to {}", args.output.display());
    Ok(())
}
