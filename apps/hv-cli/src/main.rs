use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use hv_model::{CompressorTech, SimInputs, SystemMetrics, compute_system_state};
use hv_report::{
    ReportResult, Scenario, TemplateAnalyst, analyze_or_fallback, build_report, export,
};
use hv_series::generate_chart_data;

#[derive(Parser)]
#[command(name = "hv-cli")]
#[command(about = "hvacsim CLI - A/C compressor power & thermal model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TechArg {
    Fixed,
    Variable,
}

impl From<TechArg> for CompressorTech {
    fn from(t: TechArg) -> Self {
        match t {
            TechArg::Fixed => CompressorTech::FixedDisplacement,
            TechArg::Variable => CompressorTech::VariableDisplacement,
        }
    }
}

/// Operating conditions, from a scenario file or inline flags.
#[derive(clap::Args)]
struct ConditionArgs {
    /// Path to a scenario YAML file (overrides the inline flags)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Ambient temperature (degC)
    #[arg(long, default_value_t = 35.0)]
    ambient: f64,
    /// Target cabin temperature (degC)
    #[arg(long, default_value_t = 22.0)]
    target: f64,
    /// Engine speed (RPM)
    #[arg(long, default_value_t = 1500.0)]
    rpm: f64,
    /// Relative humidity (%)
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,
    /// Compressor technology
    #[arg(long, value_enum, default_value = "variable")]
    tech: TechArg,
}

impl ConditionArgs {
    fn resolve(&self) -> ReportResult<SimInputs> {
        if let Some(path) = &self.scenario {
            return Scenario::load(path)?.to_inputs();
        }
        Ok(SimInputs::new(
            self.ambient,
            self.target,
            self.rpm,
            self.humidity,
            self.tech.into(),
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the steady-state operating point
    State {
        #[command(flatten)]
        conditions: ConditionArgs,
        /// Include narrative commentary
        #[arg(long)]
        analyze: bool,
    },
    /// Generate pull-down curve and parameter sweeps
    Series {
        #[command(flatten)]
        conditions: ConditionArgs,
        /// Series to export: pulldown, ambient, or rpm
        #[arg(long, default_value = "pulldown")]
        which: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare fixed vs variable displacement at the same conditions
    Compare {
        #[command(flatten)]
        conditions: ConditionArgs,
    },
    /// Export the full report (inputs, metrics, series) as JSON
    Export {
        #[command(flatten)]
        conditions: ConditionArgs,
        /// Output JSON file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ReportResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::State {
            conditions,
            analyze,
        } => cmd_state(&conditions, analyze),
        Commands::Series {
            conditions,
            which,
            output,
        } => cmd_series(&conditions, &which, output.as_deref()),
        Commands::Compare { conditions } => cmd_compare(&conditions),
        Commands::Export { conditions, output } => cmd_export(&conditions, output.as_deref()),
    }
}

fn print_metrics(metrics: &SystemMetrics) {
    println!("Cooling load:      {:>8.2} kW (sensible {:.2}, latent {:.2})",
        metrics.cooling_load_kw, metrics.sensible_load_kw, metrics.latent_load_kw);
    println!("COP:               {:>8.2}", metrics.cop);
    println!("Average power:     {:>8.2} kW", metrics.compressor_power_kw);
    println!("Peak torque:       {:>8.2} Nm", metrics.peak_torque_nm);
    println!("Final torque:      {:>8.2} Nm", metrics.final_torque_nm);
    println!("Displacement:      {:>8.0} %", metrics.displacement_pct);
    println!("Fuel penalty:      {:>8.2} L/h", metrics.fuel_penalty_lph);
    println!("Condensing temp:   {:>8.1} degC", metrics.t_cond_c);
    println!("Evaporating temp:  {:>8.1} degC", metrics.t_evap_c);
    println!("Discharge temp:    {:>8.1} degC", metrics.discharge_temp_c);
    println!("Idle status:       {}", metrics.idle_status);
    println!("ISC action:        {}", metrics.isc_action);
}

fn cmd_state(conditions: &ConditionArgs, analyze: bool) -> ReportResult<()> {
    let inputs = conditions.resolve()?;
    let metrics = compute_system_state(&inputs);

    println!(
        "Conditions: {} degC ambient -> {} degC target, {} RPM, {} % RH, {}",
        inputs.ambient_c, inputs.target_c, inputs.engine_rpm, inputs.humidity_pct, inputs.tech
    );
    print_metrics(&metrics);

    if analyze {
        println!();
        println!("{}", analyze_or_fallback(&TemplateAnalyst, &inputs, &metrics));
    }
    Ok(())
}

fn cmd_series(conditions: &ConditionArgs, which: &str, output: Option<&Path>) -> ReportResult<()> {
    let inputs = conditions.resolve()?;
    let charts = generate_chart_data(&inputs)?;

    let write = |w: &mut dyn io::Write| -> ReportResult<()> {
        match which {
            "ambient" => export::write_ambient_csv(&charts, w),
            "rpm" => export::write_rpm_csv(&charts, w),
            _ => export::write_pulldown_csv(&charts, w),
        }
    };

    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            write(&mut file)?;
            println!("Wrote {} series to {}", which, path.display());
        }
        None => write(&mut io::stdout())?,
    }
    Ok(())
}

fn cmd_compare(conditions: &ConditionArgs) -> ReportResult<()> {
    let inputs = conditions.resolve()?;

    for tech in [
        CompressorTech::FixedDisplacement,
        CompressorTech::VariableDisplacement,
    ] {
        let metrics = compute_system_state(&SimInputs { tech, ..inputs });
        println!("== {tech} ==");
        print_metrics(&metrics);
        println!();
    }
    Ok(())
}

fn cmd_export(conditions: &ConditionArgs, output: Option<&Path>) -> ReportResult<()> {
    let inputs = conditions.resolve()?;
    let metrics = compute_system_state(&inputs);
    let charts = generate_chart_data(&inputs)?;
    let report = build_report(&inputs, &metrics, &charts);

    match output {
        Some(path) => {
            let file = File::create(path)?;
            report.write_json(file)?;
            println!("Wrote report {} to {}", report.manifest.fingerprint, path.display());
        }
        None => report.write_json(io::stdout())?,
    }
    Ok(())
}
