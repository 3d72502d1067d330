use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};

use tax_cli::commands::{AdviceView, AnalysisView, BreakdownView, ComparisonView};
use tax_cli::config::{DEFAULT_CONFIG_FILE, Settings};
use tax_cli::logging;
use tax_core::{FinancialProfile, Regime, RegimeComparison, SavingsAdvisor, TaxCalculator, TaxInput};
use tax_data::{Analysis, ReportOptions, StatementLoader, write_report};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian income tax estimator for FY 2025-26.
///
/// Prices income under the new and old regimes, compares them, suggests
/// savings, and analyses bank statements.
#[derive(Debug, Parser)]
#[command(name = "tax-estimator", version)]
struct Cli {
    /// Settings file. Defaults to `tax-estimator.toml` in the working
    /// directory, if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,tax_core=debug`. `RUST_LOG` wins.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute tax under one regime and print every step
    Compute {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Home loan interest, section 24(b) (old regime)
        #[arg(long, default_value = "0")]
        home_loan_interest: Decimal,

        /// Additional NPS contribution, section 80CCD(1B) (old regime)
        #[arg(long, default_value = "0")]
        nps: Decimal,

        /// Savings account interest, section 80TTA/80TTB (old regime)
        #[arg(long, default_value = "0")]
        savings_interest: Decimal,
    },

    /// Compare both regimes and recommend one
    Compare {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Suggest ways to reduce tax
    Advise {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Analyse a bank statement CSV, optionally with manual entries
    Analyze {
        /// Statement CSV with description, amount, type and category columns
        #[arg(long)]
        statement: PathBuf,

        /// Manual entries CSV with description, amount and category columns
        #[arg(long)]
        manual: Option<PathBuf>,

        /// Write a CSV report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Taxpayer age in completed years
        #[arg(long)]
        age: Option<u32>,

        /// Regime currently filed under: new or old
        #[arg(long)]
        regime: Option<Regime>,
    },
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// Gross annual income in rupees
    #[arg(long)]
    income: Decimal,

    /// Taxpayer age in completed years
    #[arg(long)]
    age: Option<u32>,

    /// Section 80C investments (ELSS, PPF, EPF, LIC)
    #[arg(long = "investments-80c", default_value = "0")]
    investments_80c: Decimal,

    /// Section 80D health insurance premiums
    #[arg(long = "medical-80d", default_value = "0")]
    medical_80d: Decimal,

    /// Regime: new or old
    #[arg(long)]
    regime: Option<Regime>,
}

impl ProfileArgs {
    fn profile(
        &self,
        settings: &Settings,
    ) -> FinancialProfile {
        FinancialProfile {
            total_income: self.income,
            age: self.age.unwrap_or(settings.profile.age),
            investments_80c: self.investments_80c,
            medical_80d: self.medical_80d,
            regime: self.regime.unwrap_or(settings.profile.regime),
        }
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run(
    command: Command,
    settings: &Settings,
) -> Result<()> {
    match command {
        Command::Compute {
            profile,
            home_loan_interest,
            nps,
            savings_interest,
        } => {
            let profile = profile.profile(settings);
            let input = profile
                .tax_input(profile.regime)
                .with_housing_loan_interest(home_loan_interest)
                .with_nps_80ccd_1b(nps)
                .with_savings_interest(savings_interest);
            input.validate().context("invalid input")?;

            println!("{}", BreakdownView(&TaxCalculator::breakdown(&input)));
        }

        Command::Compare { profile } => {
            let profile = profile.profile(settings);
            profile.validate().context("invalid input")?;

            println!("{}", ComparisonView(&RegimeComparison::compare(&profile)));
        }

        Command::Advise { profile } => {
            let profile = profile.profile(settings);
            profile.validate().context("invalid input")?;

            println!("{}", AdviceView(&SavingsAdvisor::suggest(&profile)));
        }

        Command::Analyze {
            statement,
            manual,
            report,
            age,
            regime,
        } => {
            let age = age.unwrap_or(settings.profile.age);
            let regime = regime.unwrap_or(settings.profile.regime);
            let analysis = analyze(&statement, manual.as_deref(), settings)?;

            println!(
                "{}",
                AnalysisView {
                    analysis: &analysis,
                    age,
                    regime,
                }
            );

            if let Some(path) = report {
                let options = ReportOptions {
                    age,
                    regime,
                    generated_on: Local::now().date_naive(),
                };
                let file = File::create(&path)
                    .with_context(|| format!("create report {}", path.display()))?;
                write_report(BufWriter::new(file), &analysis, &options)
                    .with_context(|| format!("write report {}", path.display()))?;
                info!(path = %path.display(), "wrote report");
                println!("\nReport written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn analyze(
    statement: &Path,
    manual: Option<&Path>,
    settings: &Settings,
) -> Result<Analysis> {
    let rules = settings.category_rules()?;

    let records = StatementLoader::load_statement_file(statement)
        .with_context(|| format!("parsing {}", statement.display()))?;
    let mut analysis = Analysis::from_records(records, &rules);

    if let Some(manual) = manual {
        let entries = StatementLoader::load_manual_file(manual)
            .with_context(|| format!("parsing {}", manual.display()))?;
        analysis.add_manual_entries(&entries);
    }

    Ok(analysis)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    let level = cli.log_level.as_deref().unwrap_or(&settings.logging.level);
    logging::init_logging(level, settings.logging.file.as_deref())?;
    debug!(?cli.command, "starting");

    run(cli.command, &settings)
}
