use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use carbon_footprint::calculator::compute_footprint;
use carbon_footprint::comparison::compare_to_averages;
use carbon_footprint::config::{Config, ConfigOverrides, OutputFormat};
use carbon_footprint::factors::REFERENCE_AVERAGES;
use carbon_footprint::output::csv::{
    averages_to_csv, breakdown_to_csv, comparison_to_csv, suggestions_to_csv,
};
use carbon_footprint::output::json::render_json;
use carbon_footprint::output::table::{
    render_averages_table, render_breakdown_table, render_comparison_table, render_report,
    render_suggestions_table,
};
use carbon_footprint::profile::normalize::normalize_profile;
use carbon_footprint::profile::{AcUsage, LifestyleProfile, ProfilePatch, TransportMode, YesNo};
use carbon_footprint::suggestions::build_suggestions;
use carbon_footprint::types::EstimateReport;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Table,
    Json,
    Csv,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Table => OutputFormat::Table,
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carbon-footprint",
    about = "Estimate your monthly carbon footprint"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    output: Option<OutputArg>,
    /// JSON file with (some of) the profile answers
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Clamp answers into the ranges the form allows
    #[arg(long)]
    clamp: bool,
    #[command(flatten)]
    answers: ProfileArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct ProfileArgs {
    #[arg(long = "travel-km", global = true)]
    travel_km_per_day: Option<f64>,
    #[arg(long = "transport-mode", global = true)]
    transport_mode: Option<TransportMode>,
    #[arg(long, global = true, value_parser = parse_carpool)]
    carpool: Option<YesNo>,
    #[arg(long = "electricity-units", global = true)]
    electricity_units: Option<f64>,
    #[arg(long = "ac-usage", global = true)]
    ac_usage: Option<AcUsage>,
    #[arg(long = "renewable-energy", global = true, value_parser = parse_renewable)]
    renewable_energy: Option<YesNo>,
    #[arg(long = "meat-meals", global = true)]
    meat_meals_per_week: Option<f64>,
    #[arg(long = "dairy-liters", global = true)]
    dairy_liters_per_day: Option<f64>,
    #[arg(long = "local-food", global = true, value_parser = parse_local_food)]
    local_food: Option<YesNo>,
    #[arg(long = "waste-kg", global = true)]
    waste_kg_per_week: Option<f64>,
    #[arg(long, global = true, value_parser = parse_recycle)]
    recycle: Option<YesNo>,
    #[arg(long = "water-liters", global = true)]
    water_usage_liters: Option<f64>,
    #[arg(long = "shopping-freq", global = true)]
    shopping_freq: Option<u32>,
    #[arg(long = "online-orders", global = true)]
    online_orders: Option<u32>,
}

fn parse_carpool(raw: &str) -> Result<YesNo, carbon_footprint::FootprintError> {
    YesNo::parse_field("carpool", raw)
}

fn parse_renewable(raw: &str) -> Result<YesNo, carbon_footprint::FootprintError> {
    YesNo::parse_field("renewableEnergy", raw)
}

fn parse_local_food(raw: &str) -> Result<YesNo, carbon_footprint::FootprintError> {
    YesNo::parse_field("localFood", raw)
}

fn parse_recycle(raw: &str) -> Result<YesNo, carbon_footprint::FootprintError> {
    YesNo::parse_field("recycle", raw)
}

impl From<ProfileArgs> for ProfilePatch {
    fn from(value: ProfileArgs) -> Self {
        Self {
            travel_km_per_day: value.travel_km_per_day,
            transport_mode: value.transport_mode,
            carpool: value.carpool,
            electricity_units: value.electricity_units,
            ac_usage: value.ac_usage,
            renewable_energy: value.renewable_energy,
            meat_meals_per_week: value.meat_meals_per_week,
            dairy_liters_per_day: value.dairy_liters_per_day,
            local_food: value.local_food,
            waste_kg_per_week: value.waste_kg_per_week,
            recycle: value.recycle,
            water_usage_liters: value.water_usage_liters,
            shopping_freq: value.shopping_freq,
            online_orders: value.online_orders,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Breakdown, comparison and suggestions together
    Estimate,
    Breakdown,
    Suggest,
    Compare,
    Averages,
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(config_path.as_path()))?;
    config.apply_overrides(ConfigOverrides {
        output: cli.output.map(OutputFormat::from),
        clamp: cli.clamp.then_some(true),
    });
    info!(path = %config_path.display(), "loaded config");

    let format = config.output.format;
    let load_profile = || resolve_profile(&config, cli.profile.as_deref(), cli.answers.clone());

    match &cli.command {
        Commands::Config { init, show } => {
            handle_config_command(*init, *show, &config, &config_path)?;
        }
        Commands::Averages => print_averages(format)?,
        Commands::Estimate => {
            let profile = load_profile()?;
            let report = EstimateReport::build(profile);
            match format {
                OutputFormat::Table => println!("{}", render_report(&report)),
                OutputFormat::Json => println!("{}", render_json(&report)?),
                OutputFormat::Csv => {
                    println!("{}", breakdown_to_csv(&report.breakdown)?);
                    println!("{}", suggestions_to_csv(&report.suggestions)?);
                }
            }
        }
        Commands::Breakdown => {
            let profile = load_profile()?;
            let breakdown = compute_footprint(&profile);
            match format {
                OutputFormat::Table => println!("{}", render_breakdown_table(&breakdown)),
                OutputFormat::Json => println!("{}", render_json(&breakdown)?),
                OutputFormat::Csv => println!("{}", breakdown_to_csv(&breakdown)?),
            }
        }
        Commands::Suggest => {
            let profile = load_profile()?;
            let breakdown = compute_footprint(&profile);
            let suggestions = build_suggestions(&breakdown, &profile);
            match format {
                OutputFormat::Table => println!("{}", render_suggestions_table(&suggestions)),
                OutputFormat::Json => println!("{}", render_json(&suggestions)?),
                OutputFormat::Csv => println!("{}", suggestions_to_csv(&suggestions)?),
            }
        }
        Commands::Compare => {
            let profile = load_profile()?;
            let comparison = compare_to_averages(&compute_footprint(&profile));
            match format {
                OutputFormat::Table => println!("{}", render_comparison_table(&comparison)),
                OutputFormat::Json => println!("{}", render_json(&comparison)?),
                OutputFormat::Csv => println!("{}", comparison_to_csv(&comparison)?),
            }
        }
    }

    Ok(())
}

fn resolve_profile(
    config: &Config,
    profile_file: Option<&Path>,
    answers: ProfileArgs,
) -> Result<LifestyleProfile> {
    let mut profile = config.base_profile();
    if let Some(path) = profile_file {
        let patch = ProfilePatch::from_path(path)
            .with_context(|| format!("failed loading profile: {}", path.display()))?;
        profile.apply(&patch);
    }
    profile.apply(&answers.into());

    if config.input.clamp {
        let changed = normalize_profile(&mut profile);
        if !changed.is_empty() {
            warn!("clamped out-of-range answers: {}", changed.join(", "));
        }
    }
    Ok(profile)
}

fn handle_config_command(
    init: bool,
    show: bool,
    config: &Config,
    config_path: &Path,
) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn print_averages(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_averages_table(&REFERENCE_AVERAGES)),
        OutputFormat::Json => println!("{}", render_json(&REFERENCE_AVERAGES)?),
        OutputFormat::Csv => println!("{}", averages_to_csv(&REFERENCE_AVERAGES)?),
    }
    Ok(())
}
