//! well-traverse - producing-well pressure traverse and IPR calculator
//!
//! # Usage
//!
//! ```bash
//! # Pressure profile for the configured scenario
//! well-traverse traverse
//!
//! # Override individual parameters, JSON output
//! well-traverse report --reservoir-pressure 5000 --depth 5000 --format json
//!
//! # HTTP service
//! well-traverse serve --addr 127.0.0.1:8080
//!
//! # Inspect configuration
//! well-traverse config show
//! well-traverse config validate --path well_traverse.toml
//! ```
//!
//! # Environment Variables
//!
//! - `WELL_TRAVERSE_CONFIG`: Path to a TOML config file
//! - `WELL_TRAVERSE_CORS_ORIGINS`: Comma-separated allowed origins for `serve`
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use well_traverse::api::{create_app, ApiState};
use well_traverse::config::{self, SimConfig, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use well_traverse::physics_engine::{self, efficiency_bar_percent, TraverseOptions};
use well_traverse::types::{IprData, Locale, SimulatorParams, TraverseResult, WellReport};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-traverse")]
#[command(about = "Pressure traverse and inflow performance for a producing well")]
#[command(version)]
struct CliArgs {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file to use instead of the standard search order
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pressure profile from bottom-hole to wellhead
    Traverse {
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Vogel and Fetkovich inflow curves with the operating point
    Ipr {
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Combined operator summary
    Report {
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run the HTTP API
    Serve {
        /// Override the bind address from [server].addr
        #[arg(short, long)]
        addr: Option<String>,
    },
    /// Inspect or check configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Validate a config file and report errors and warnings
    Validate {
        /// File to validate (defaults to the standard search order)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// Parameter overrides. Anything left unset comes from `[scenario]`.
#[derive(clap::Args, Debug)]
struct ParamArgs {
    /// Static reservoir pressure (psi)
    #[arg(long)]
    reservoir_pressure: Option<f64>,
    /// Water fraction of produced liquid (0-1)
    #[arg(long)]
    water_cut: Option<f64>,
    /// Oil gravity (°API)
    #[arg(long)]
    oil_api: Option<f64>,
    /// Tubing inner diameter (in)
    #[arg(long)]
    tubing_id: Option<f64>,
    /// Production rate (STB/day)
    #[arg(long)]
    production_rate: Option<f64>,
    /// Well depth (ft)
    #[arg(long)]
    depth: Option<f64>,
    /// Bubble point pressure (psi)
    #[arg(long)]
    bubble_point: Option<f64>,
    /// Productivity index (STB/day/psi)
    #[arg(long)]
    productivity_index: Option<f64>,
}

impl ParamArgs {
    fn resolve(&self, base: SimulatorParams) -> SimulatorParams {
        SimulatorParams {
            reservoir_pressure: self.reservoir_pressure.unwrap_or(base.reservoir_pressure),
            water_cut: self.water_cut.unwrap_or(base.water_cut),
            oil_api: self.oil_api.unwrap_or(base.oil_api),
            tubing_id: self.tubing_id.unwrap_or(base.tubing_id),
            production_rate: self.production_rate.unwrap_or(base.production_rate),
            depth: self.depth.or(base.depth),
            bubble_point_pressure: self.bubble_point.or(base.bubble_point_pressure),
            productivity_index: self.productivity_index.or(base.productivity_index),
        }
    }
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Status message language (en, ar); defaults to [traverse].locale
    #[arg(long)]
    locale: Option<Locale>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ============================================================================
// Logging
// ============================================================================

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries command output; logs go to stderr
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

// ============================================================================
// Config Resolution
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(p) => {
            let cfg = SimConfig::load_from_file(p)
                .with_context(|| format!("Failed to load config from {}", p.display()))?;
            info!(path = %p.display(), well = %cfg.well.name, "Loaded config");
            Ok(cfg)
        }
        None => Ok(SimConfig::load()),
    }
}

/// The file the standard search order would read, if any.
fn discovered_config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV_VAR)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.exists())
        .or_else(|| Some(PathBuf::from(LOCAL_CONFIG_FILE)).filter(|p| p.exists()))
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{s}");
    Ok(())
}

fn print_traverse_table(result: &TraverseResult) {
    println!("Bottom-hole pressure (pwf): {:>10.1} psi", result.pwf);
    println!("Wellhead pressure (WHP):    {:>10.1} psi", result.whp);
    println!("Tubing pressure drop:       {:>10.1} psi", result.tubing_pressure_drop());
    println!("Mixture velocity:           {:>10.3} ft/s", result.velocity);
    println!("Wellhead fluid SG:          {:>10.4}", result.fluid_sg);
    println!("Status: {} - {}", result.status, result.status_message);
    println!();
    println!("{:>10}  {:>12}", "Depth (ft)", "P (psi)");
    for (depth, pressure) in result.profile() {
        println!("{depth:>10.1}  {pressure:>12.2}");
    }
}

fn print_ipr_table(data: &IprData) {
    println!("Vogel AOF:      {:>10.1} STB/d", data.aof_vogel);
    println!("Fetkovich AOF:  {:>10.1} STB/d", data.aof_fetkovich);
    println!(
        "Operating point: pwf {:.1} psi @ {:.1} STB/d",
        data.operating_point.pwf, data.operating_point.rate
    );
    println!();
    println!("{:>10}  {:>12}  {:>14}", "pwf (psi)", "Vogel", "Fetkovich");
    for row in data.chart_rows() {
        println!(
            "{:>10.1}  {:>12.1}  {:>14.1}",
            row.pwf, row.vogel_rate, row.fetkovich_rate
        );
    }
}

fn print_report_table(report: &WellReport, well_name: &str) {
    println!("Well: {well_name}");
    println!("Reservoir pressure: {:>10.1} psi", report.reservoir_pressure);
    println!("pwf:                {:>10.1} psi", report.pwf);
    println!("Drawdown:           {:>10.1} psi", report.drawdown);
    println!(
        "WHP:                {:>10.1} psi (gauge {:.0} % of Pr)",
        report.whp,
        report.whp_gauge * 100.0
    );
    println!("Velocity:           {:>10.3} ft/s", report.velocity);
    println!("Production rate:    {:>10.1} STB/d", report.production_rate);
    println!("Vogel AOF:          {:>10.1} STB/d", report.aof_vogel);
    println!("Fetkovich AOF:      {:>10.1} STB/d", report.aof_fetkovich);
    match report.efficiency_percent {
        Some(e) => println!(
            "Efficiency:         {e:>10.1} % (bar {:.0} %)",
            efficiency_bar_percent(report.production_rate, report.aof_vogel)
        ),
        None => println!("Efficiency:         {:>10}", "n/a"),
    }
    println!("Fluid SG / color:   {:>10.4} {}", report.fluid_sg, report.fluid_color);
    println!(
        "Status: {} [{}] - {}",
        report.status, report.status_label, report.status_message
    );
}

// ============================================================================
// Commands
// ============================================================================

/// Resolve parameters against the config and log any out-of-range values.
fn prepare_params(args: &ParamArgs, cfg: &SimConfig) -> Result<SimulatorParams> {
    let params = args.resolve(cfg.scenario);
    params.ensure_finite().context("Invalid parameters")?;
    for w in params.check(&cfg.bounds) {
        warn!(field = w.field, "{}", w);
    }
    Ok(params)
}

fn traverse_options(cfg: &SimConfig, output: &OutputArgs) -> TraverseOptions {
    let mut options = cfg.traverse_options();
    if let Some(locale) = output.locale {
        options.locale = locale;
    }
    options
}

fn run_traverse(cfg: &SimConfig, params: &ParamArgs, output: &OutputArgs) -> Result<()> {
    let params = prepare_params(params, cfg)?;
    let result = physics_engine::calculate_traverse_with(&params, &traverse_options(cfg, output));
    match output.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => print_traverse_table(&result),
    }
    Ok(())
}

fn run_ipr(cfg: &SimConfig, params: &ParamArgs, output: &OutputArgs) -> Result<()> {
    let params = prepare_params(params, cfg)?;
    let data = physics_engine::calculate_ipr_with(&params, &cfg.ipr_options());
    match output.format {
        OutputFormat::Json => print_json(&data)?,
        OutputFormat::Table => print_ipr_table(&data),
    }
    Ok(())
}

fn run_report(cfg: &SimConfig, params: &ParamArgs, output: &OutputArgs) -> Result<()> {
    let params = prepare_params(params, cfg)?;
    let report = physics_engine::well_report(
        &params,
        &traverse_options(cfg, output),
        &cfg.ipr_options(),
    );
    match output.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => print_report_table(&report, &cfg.well.name),
    }
    Ok(())
}

async fn run_server(addr: Option<String>) -> Result<()> {
    let server_addr = addr.unwrap_or_else(|| config::get().server.addr.clone());
    let app = create_app(ApiState::from_global());

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!("HTTP server listening on {}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received Ctrl+C, shutting down");
        })
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn run_config(action: &ConfigAction, global_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = load_config(global_path)?;
            print!("{}", cfg.to_toml().context("Failed to render config")?);
        }
        ConfigAction::Validate { path } => {
            let target = path
                .clone()
                .or_else(|| global_path.map(Path::to_path_buf))
                .or_else(discovered_config_path);
            match target {
                Some(p) => {
                    let cfg = SimConfig::load_from_file(&p)
                        .with_context(|| format!("{} is invalid", p.display()))?;
                    println!("{}: OK (well '{}')", p.display(), cfg.well.name);
                }
                None => {
                    SimConfig::default()
                        .validate()
                        .context("Built-in defaults are invalid")?;
                    println!("No config file found; built-in defaults are valid");
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_json);

    let config_path = args.config.as_deref();

    match &args.command {
        Command::Config { action } => run_config(action, config_path),
        Command::Serve { addr } => {
            config::init(load_config(config_path)?);
            run_server(addr.clone()).await
        }
        Command::Traverse { params, output } => {
            run_traverse(&load_config(config_path)?, params, output)
        }
        Command::Ipr { params, output } => run_ipr(&load_config(config_path)?, params, output),
        Command::Report { params, output } => {
            run_report(&load_config(config_path)?, params, output)
        }
    }
}
