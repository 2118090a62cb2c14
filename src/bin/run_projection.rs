//! Run a token supply projection or a parameter sweep from the command line
//!
//! Usage:
//!   run_projection project --inflation-rate 7 --burn-rate 2 --format csv
//!   run_projection project --params scenario.json --output out.json --format json
//!   run_projection sweep --field burn-rate --from 0 --to 10 --step 0.5

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tokenomics_sim::{
    output, sweep::linspace_step, ParameterBounds, Preset, ProjectionEngine, SimulationParameters,
    SweepField,
};

#[derive(Parser)]
#[command(name = "run_projection")]
#[command(about = "Project token supply, staking and governance participation year by year")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single projection
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Vary one parameter and summarize each run
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Parameter to vary
        #[arg(long, value_enum)]
        field: SweepField,

        /// First value
        #[arg(long)]
        from: f64,

        /// Last value (inclusive)
        #[arg(long)]
        to: f64,

        /// Step between values
        #[arg(long, default_value = "1")]
        step: f64,

        /// Write CSV to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

/// Parameter sources, applied in order: preset or file, then individual flags
#[derive(Args)]
struct ParamArgs {
    /// JSON parameter record; missing fields take defaults
    #[arg(long, conflicts_with = "preset")]
    params: Option<PathBuf>,

    /// Start from a named supply model (default, fixed, inflationary, deflationary)
    #[arg(long)]
    preset: Option<Preset>,

    #[arg(long)]
    initial_supply: Option<f64>,

    #[arg(long)]
    max_supply: Option<f64>,

    /// Annual inflation (%)
    #[arg(long)]
    inflation_rate: Option<f64>,

    /// Annual burn of circulating supply (%)
    #[arg(long)]
    burn_rate: Option<f64>,

    /// Staking reward APY (%)
    #[arg(long)]
    staking_reward: Option<f64>,

    /// Staking lockup (days)
    #[arg(long)]
    lockup_period: Option<u32>,

    /// Governance threshold (% staking participation)
    #[arg(long)]
    governance_threshold: Option<f64>,

    #[arg(long)]
    years: Option<u32>,

    /// Pull slider-controlled parameters into the simulator's ranges
    /// instead of rejecting out-of-range input
    #[arg(long)]
    clamp: bool,
}

impl ParamArgs {
    fn resolve(&self) -> Result<SimulationParameters> {
        let mut p = match (&self.params, self.preset) {
            (Some(path), _) => SimulationParameters::from_json_file(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            (None, Some(preset)) => preset.params(),
            (None, None) => SimulationParameters::default(),
        };

        if let Some(v) = self.initial_supply { p.initial_supply = v; }
        if let Some(v) = self.max_supply { p.max_supply = v; }
        if let Some(v) = self.inflation_rate { p.inflation_rate = v; }
        if let Some(v) = self.burn_rate { p.burn_rate = v; }
        if let Some(v) = self.staking_reward { p.staking_reward = v; }
        if let Some(v) = self.lockup_period { p.lockup_period = v; }
        if let Some(v) = self.governance_threshold { p.governance_threshold = v; }
        if let Some(v) = self.years { p.simulation_years = v; }

        if self.clamp {
            p = ParameterBounds::default().clamp(&p);
        }
        p.validate().context("invalid simulation parameters")?;
        Ok(p)
    }
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Project { params, format, output: out_path } => {
            let params = params.resolve()?;
            let result = ProjectionEngine::new(params).run();

            let mut out = open_output(out_path.as_ref())?;
            match format {
                Format::Table => out.write_all(output::render_table(&result).as_bytes())?,
                Format::Csv => output::write_csv(&mut out, &result.snapshots)?,
                Format::Json => writeln!(out, "{}", output::to_json(&result)?)?,
            }
            out.flush()?;

            if let Some(path) = out_path {
                log::info!("Output written to {}", path.display());
            }
        }
        Command::Sweep { params, field, from, to, step, output: out_path } => {
            let base = params.resolve()?;
            let values = linspace_step(from, to, step).context("invalid sweep range")?;
            let points = tokenomics_sim::sweep(&base, field, &values);

            let mut out = open_output(out_path.as_ref())?;
            output::write_sweep_csv(&mut out, &points)?;
            out.flush()?;

            log::info!("Swept {:?} over {} values", field, points.len());
        }
    }
    Ok(())
}
