use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::{info, warn};

use synthcare::export::{analytics_tables, write_tables};
use synthcare::{
    AdmissionConfig, ExportConfig, ExportFormat, GeneratorConfig, check_dataset, generate_dataset,
    load_dataset, write_dataset,
};

/// Issues listed individually by `check`
const MAX_LISTED_ISSUES: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "synthcare", version, about = "Synthetic hospital admission datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset and write it to disk
    Generate {
        #[arg(long, default_value_t = 5000, help = "Number of patients")]
        patients: usize,
        #[arg(long, default_value_t = 25, help = "Number of hospitals")]
        hospitals: usize,
        #[arg(long, default_value_t = 15000, help = "Number of admissions")]
        admissions: usize,
        #[arg(long, default_value_t = 42, env = "SYNTHCARE_SEED", help = "Random seed")]
        seed: u64,
        #[command(flatten)]
        output: OutputArgs,
        #[arg(long, help = "Skip the analytics tables")]
        no_analytics: bool,
    },
    /// Run the quality checks on a dataset written as Parquet
    Check {
        #[arg(long, default_value = "data", help = "Directory with the Parquet tables")]
        input_dir: PathBuf,
    },
    /// Compute the analytics tables of a dataset written as Parquet
    Report {
        #[arg(long, default_value = "data", help = "Directory with the Parquet tables")]
        input_dir: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    #[arg(long, default_value = "data", help = "Directory the tables are written to")]
    output_dir: PathBuf,
    #[arg(long = "format", value_enum, default_values_t = [FormatArg::Parquet], help = "Output format (repeatable)")]
    formats: Vec<FormatArg>,
    #[arg(long, help = "Worker threads for writing (defaults to the number of CPUs)")]
    threads: Option<usize>,
    #[arg(long, help = "Hide progress bars")]
    no_progress: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Parquet,
    Csv,
    Sql,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Parquet => Self::Parquet,
            FormatArg::Csv => Self::Csv,
            FormatArg::Sql => Self::Sql,
        }
    }
}

impl OutputArgs {
    fn export_config(&self, include_analytics: bool) -> ExportConfig {
        let formats: Vec<ExportFormat> = self.formats.iter().copied().map(ExportFormat::from).unique().collect();
        let defaults = ExportConfig::new(&self.output_dir);
        ExportConfig {
            formats,
            threads: self.threads.unwrap_or(defaults.threads),
            include_analytics,
            show_progress: !self.no_progress,
            ..defaults
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Command::Generate {
            patients,
            hospitals,
            admissions,
            seed,
            output,
            no_analytics,
        } => {
            let config = GeneratorConfig::builder()
                .seed(seed)
                .patients(patients)
                .hospitals(hospitals)
                .admissions(admissions)
                .show_progress(!output.no_progress)
                .build();
            let dataset = generate_dataset(&config).context("dataset generation failed")?;
            dataset.summary().log();

            let export = output.export_config(!no_analytics);
            let written = write_dataset(&dataset, &export)
                .with_context(|| format!("failed to export to {}", export.output_dir.display()))?;
            info!("Wrote {} files in {:?}", written.len(), start.elapsed());
        }
        Command::Check { input_dir } => {
            let dataset = load_dataset(&input_dir)
                .with_context(|| format!("failed to load dataset from {}", input_dir.display()))?;
            if dataset.admissions.is_empty() {
                warn!("No admissions found in {}, nothing to check", input_dir.display());
                return Ok(ExitCode::FAILURE);
            }
            let report = check_dataset(&dataset, &AdmissionConfig::default());
            report.log(MAX_LISTED_ISSUES);
            if !report.is_clean() {
                warn!("{} quality issues found", report.issues.len());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Report { input_dir, output } => {
            let dataset = load_dataset(&input_dir)
                .with_context(|| format!("failed to load dataset from {}", input_dir.display()))?;
            let export = output.export_config(true);
            let tables = analytics_tables(&dataset, export.batch_size)?;
            let written = write_tables(&tables, &export)
                .with_context(|| format!("failed to write reports to {}", export.output_dir.display()))?;
            info!("Wrote {} report files in {:?}", written.len(), start.elapsed());
        }
    }

    Ok(ExitCode::SUCCESS)
}
