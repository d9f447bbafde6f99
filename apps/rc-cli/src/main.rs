use clap::{Parser, Subcommand};
use rc_app::{
    AppConfig, AppError, AppResult, BackendKind, ControlInputs, PhChart, build_oracle,
    compute_report, format_metrics, save_yaml, state_rows,
};
use rc_core::to_degc;
use rc_fluids::Refrigerant;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "refcycle CLI - R32 vapor-compression cycle calculator", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Property backend, overrides the config file
    #[arg(long, global = true)]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cycle for one set of control inputs
    Compute {
        /// Compressor frequency [Hz]
        #[arg(long)]
        frequency: Option<f64>,
        /// Expansion valve opening [%]
        #[arg(long)]
        valve: Option<f64>,
        /// Outdoor fan speed [RPM]
        #[arg(long)]
        fan: Option<f64>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the saturation dome as CSV (P kPa, h_liquid, h_vapor kJ/kg)
    Dome {
        /// Number of pressure samples, defaults to the config value
        #[arg(long)]
        samples: Option<usize>,
    },
    /// Print the critical temperature of R32
    Critical,
    /// Write the default config to a file
    InitConfig {
        /// Output YAML path
        path: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    tracing::debug!(backend = config.backend.label(), "configuration loaded");

    match cli.command {
        Commands::Compute {
            frequency,
            valve,
            fan,
            json,
        } => {
            let d = config.defaults;
            let inputs = ControlInputs::new(
                frequency.unwrap_or(d.frequency),
                valve.unwrap_or(d.valve_opening),
                fan.unwrap_or(d.fan_speed),
            );
            cmd_compute(&config, inputs, json)
        }
        Commands::Dome { samples } => {
            if let Some(n) = samples {
                config.chart.dome_samples = n;
            }
            cmd_dome(&config)
        }
        Commands::Critical => cmd_critical(&config),
        Commands::InitConfig { path } => cmd_init_config(&path),
    }
}

fn cmd_compute(config: &AppConfig, inputs: ControlInputs, json: bool) -> AppResult<()> {
    if !inputs.in_range() {
        tracing::warn!(?inputs, "inputs outside the offered control ranges");
    }
    let oracle = build_oracle(config.backend);
    let report = compute_report(oracle.as_ref(), &inputs)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::InvalidInput(format!("JSON encoding failed: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "Inputs: {:.1} Hz, EEV {:.1} %, fan {} RPM ({})",
        inputs.frequency,
        inputs.valve_opening,
        inputs.fan_speed.trunc() as i64,
        report.backend
    );
    let c = &report.conditions;
    println!(
        "  T_evap = {:.1} °C, T_cond = {:.1} °C, SH = {:.1} K, T_discharge = {:.1} °C",
        c.evaporation_c, c.condensation_c, c.superheat_k, c.discharge_c
    );
    println!();
    println!("{:<6} {:>14} {:>16}  State", "Point", "P [kPa]", "h [kJ/kg]");
    for row in state_rows(&report.cycle) {
        println!(
            "{:<6} {:>14} {:>16}  {}",
            row.point, row.pressure_kpa, row.enthalpy_kj_per_kg, row.description
        );
    }
    let m = format_metrics(&report.metrics);
    println!();
    println!("Cooling effect:   {}", m.cooling_effect);
    println!("Compressor work:  {}", m.compressor_work);
    println!("EER:              {}", m.eer);
    Ok(())
}

fn cmd_dome(config: &AppConfig) -> AppResult<()> {
    config.validate()?;
    let oracle = build_oracle(config.backend);
    let chart = PhChart::build(oracle.as_ref(), &config.chart)?;
    println!("p_kpa,h_liquid_kj_per_kg,h_vapor_kj_per_kg");
    let dome = &chart.dome;
    for i in 0..dome.len() {
        println!(
            "{:.3},{:.3},{:.3}",
            dome.pressures_kpa[i], dome.liquid_kj_per_kg[i], dome.vapor_kj_per_kg[i]
        );
    }
    tracing::info!(
        h_min = chart.h_range.0,
        h_max = chart.h_range.1,
        "chart enthalpy window"
    );
    Ok(())
}

fn cmd_critical(config: &AppConfig) -> AppResult<()> {
    let oracle = build_oracle(config.backend);
    let t = oracle.critical_temperature(Refrigerant::R32)?;
    println!(
        "{} critical temperature: {:.2} °C ({})",
        Refrigerant::R32,
        to_degc(t),
        oracle.name()
    );
    Ok(())
}

fn cmd_init_config(path: &Path) -> AppResult<()> {
    save_yaml(path, &AppConfig::default())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
