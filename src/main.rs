use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use abcompute::compute::{
    AllocationPolicy, AlternativeHypothesis, Audit, CalculationInput, CalculationResult,
    DEFAULT_DAILY_TRAFFIC, HypothesisType, NormalApproximation, PowerRootFind,
    SampleSizeCalculator, StatisticsProvider, Summary,
};
use abcompute::error::AbcomputeErr;
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Minimum sample size for an A/B test on conversion rates
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Current conversion rate (%)
    #[arg(long, default_value_t = 5.0)]
    baseline: f64,

    /// Minimum detectable effect, relative to the current rate (%)
    #[arg(long, default_value_t = 20.0)]
    mde: f64,

    /// Confidence level (%)
    #[arg(long, default_value_t = 95.0)]
    confidence: f64,

    /// Statistical power (%)
    #[arg(long, default_value_t = 80.0)]
    power: f64,

    /// Share of traffic sent to control (%)
    #[arg(long, default_value_t = 50.0)]
    control: f64,

    /// Share of traffic sent to the variation (%)
    #[arg(long, default_value_t = 50.0)]
    treatment: f64,

    /// Read parameters from a JSON file (rates as fractions, weights in
    /// percent) instead of the flags above
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Solver::ClosedForm)]
    solver: Solver,

    /// Tolerance of the root-find solver, in subjects
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,

    /// Test only for an increase over the current rate
    #[arg(long, default_value_t = false)]
    one_sided: bool,

    /// Use the traffic weights as given instead of completing them to 100%
    #[arg(long, default_value_t = false)]
    ratio_only: bool,

    /// Daily traffic used for run time estimates; may be repeated
    #[arg(long = "traffic", value_name = "PER_DAY")]
    traffic: Vec<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the parameters and formulas behind the result
    #[arg(long, default_value_t = false)]
    show_audit: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Solver {
    /// Closed form of the z-test sample size
    ClosedForm,
    /// Numerical solve of the two-sided power equation
    RootFind,
}

#[derive(Error, Debug)]
enum CliErr {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0}")]
    Compute(#[from] AbcomputeErr),
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a CalculationInput,
    hypothesis: HypothesisType,
    result: &'a CalculationResult,
    summary: &'a Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliErr> {
    let input = match &cli.input {
        Some(path) => read_input(path)?,
        None => CalculationInput {
            baseline_rate: cli.baseline / 100.,
            relative_improvement: cli.mde / 100.,
            confidence: cli.confidence / 100.,
            power: cli.power / 100.,
            control_weight: cli.control,
            treatment_weight: cli.treatment,
        },
    };
    debug!(?input, solver = ?cli.solver, one_sided = cli.one_sided, "parsed parameters");

    let hypothesis = if cli.one_sided {
        HypothesisType::TrtGreater
    } else {
        HypothesisType::NotEqual
    };
    let policy = if cli.ratio_only {
        AllocationPolicy::RatioOnly
    } else {
        AllocationPolicy::default()
    };

    let (result, audit) = match cli.solver {
        Solver::ClosedForm => solve(
            NormalApproximation::new(hypothesis),
            policy,
            &input,
            cli.show_audit,
        )?,
        Solver::RootFind => solve(
            PowerRootFind::new(hypothesis, cli.tol),
            policy,
            &input,
            cli.show_audit,
        )?,
    };
    let allocation = result.allocation();
    if allocation.adjusted {
        warn!(
            supplied_total = input.control_weight + input.treatment_weight,
            control = allocation.control_weight,
            treatment = allocation.treatment_weight,
            "traffic split does not add up to 100%; treatment share re-derived from control"
        );
    }
    info!(
        effect_size = result.effect_size(),
        control_n_exact = result.control_n_exact(),
        total_n = result.total_n(),
        "computed sample size"
    );

    let traffic: &[u64] = if cli.traffic.is_empty() {
        &DEFAULT_DAILY_TRAFFIC[..]
    } else {
        cli.traffic.as_slice()
    };
    let summary = Summary::new(&result, traffic)?;
    let audit = audit.map(|audit| audit.to_string());

    if cli.json {
        let report = Report {
            input: &input,
            hypothesis,
            result: &result,
            summary: &summary,
            audit,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&result, &summary, audit.as_deref());
    }
    Ok(())
}

/// Runs the calculation with `provider`, rendering the audit from the same
/// provider when asked for
fn solve<P: StatisticsProvider + AlternativeHypothesis>(
    provider: P,
    policy: AllocationPolicy,
    input: &CalculationInput,
    with_audit: bool,
) -> Result<(CalculationResult, Option<Audit>), CliErr> {
    let calculator = SampleSizeCalculator::new(provider).with_policy(policy);
    let result = calculator.compute(input)?;
    let audit = if with_audit {
        Some(Audit::new(input, &result, calculator.provider())?)
    } else {
        None
    };
    Ok((result, audit))
}

fn read_input(path: &Path) -> Result<CalculationInput, CliErr> {
    let contents = fs::read_to_string(path).map_err(|source| CliErr::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliErr::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn print_report(result: &CalculationResult, summary: &Summary, audit: Option<&str>) {
    let baseline_pct = result.baseline_rate() * 100.;
    let treatment_pct = result.treatment_rate() * 100.;
    let lift_pct = (result.treatment_rate() / result.baseline_rate() - 1.) * 100.;

    println!(
        "{} is the minimum sample size required.",
        group_thousands(result.total_n())
    );
    println!();
    println!(
        "For a {lift_pct:.2}% relative improvement (from {baseline_pct:.2}% to {treatment_pct:.2}%, \
         a difference of {:.2} percentage points), with {:.0}% power, the experiment needs at \
         least {} samples for control and {} for treatment.",
        summary.improvement_points,
        result.power() * 100.,
        group_thousands(result.control_n()),
        group_thousands(result.treatment_n()),
    );
    println!();
    println!("Control");
    println!("  Sample size:          {}", group_thousands(result.control_n()));
    println!(
        "  Expected conversions: {}",
        group_thousands(summary.control_conversions)
    );
    println!("  Conversion rate:      {baseline_pct:.2}%");
    println!("Treatment");
    println!(
        "  Sample size:          {}",
        group_thousands(result.treatment_n())
    );
    println!(
        "  Expected conversions: {}",
        group_thousands(summary.treatment_conversions)
    );
    println!(
        "  Conversion rate:      {treatment_pct:.2}% (+{:.2} points)",
        summary.improvement_points
    );
    println!();
    println!("Time to run:");
    for run_time in &summary.run_times {
        println!(
            "  With {} visitors/day: approximately {} days",
            group_thousands(run_time.daily_traffic),
            run_time.days
        );
    }

    if let Some(audit) = audit {
        println!();
        println!("{audit}");
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(8143), "8,143");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn cli_defaults_match_form() {
        let cli = Cli::parse_from(["abcompute"]);
        assert_eq!(cli.baseline, 5.0);
        assert_eq!(cli.mde, 20.0);
        assert_eq!(cli.solver, Solver::ClosedForm);
        assert!(cli.traffic.is_empty());
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from([
            "abcompute",
            "--baseline",
            "10",
            "--solver",
            "root-find",
            "--traffic",
            "500",
            "--traffic",
            "2000",
            "--one-sided",
            "-vv",
        ]);
        assert_eq!(cli.baseline, 10.0);
        assert_eq!(cli.solver, Solver::RootFind);
        assert_eq!(cli.traffic, vec![500, 2000]);
        assert!(cli.one_sided);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn one_sided_audit_and_report() {
        let input = CalculationInput::default();
        let (result, audit) = solve(
            PowerRootFind::new(HypothesisType::TrtGreater, 1e-6),
            AllocationPolicy::default(),
            &input,
            true,
        )
        .unwrap();
        let audit = audit.expect("audit requested").to_string();
        assert!(audit.contains("alternative          = larger"));

        let summary = Summary::new(&result, &DEFAULT_DAILY_TRAFFIC).unwrap();
        let report = Report {
            input: &input,
            hypothesis: HypothesisType::TrtGreater,
            result: &result,
            summary: &summary,
            audit: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["hypothesis"], "larger");
        assert!(json.get("audit").is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
