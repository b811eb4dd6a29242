//! svmviz Command Line Interface
//!
//! Classify point sets, generate decision-boundary geometry and save
//! exploration reports from CSV files or JSON scenarios.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use svmviz::api::{Exploration, Explorer};
use svmviz::core::{LabeledPoint, Result, VizError};
use svmviz::data::{CsvDataset, Scenario};
use svmviz::kernel::KernelKind;
use svmviz::report::ExplorationReport;
use svmviz::utils::display_jitter;

#[derive(Parser)]
#[command(name = "svmviz")]
#[command(about = "Heuristic SVM decision boundaries and support vectors for teaching")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "svmviz contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify points and report metrics and support vectors
    Classify(ClassifyArgs),
    /// Generate decision-boundary geometry as JSON
    Boundary(BoundaryArgs),
    /// Run a full exploration and save it as a JSON report
    Report(ReportArgs),
    /// Display a saved report
    Info(InfoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliKernel {
    #[value(name = "linear")]
    Linear,
    #[value(name = "polynomial", alias = "poly")]
    Polynomial,
    #[value(name = "rbf", alias = "radial-basis")]
    Rbf,
    #[value(name = "sigmoid")]
    Sigmoid,
}

impl From<CliKernel> for KernelKind {
    fn from(cli_kernel: CliKernel) -> Self {
        match cli_kernel {
            CliKernel::Linear => KernelKind::Linear,
            CliKernel::Polynomial => KernelKind::Polynomial,
            CliKernel::Rbf => KernelKind::RadialBasis,
            CliKernel::Sigmoid => KernelKind::Sigmoid,
        }
    }
}

/// Where the points come from and how to explore them
#[derive(Args)]
struct InputArgs {
    /// Scenario file (JSON) with points, kernel and parameters
    #[arg(long, conflicts_with = "data")]
    scenario: Option<PathBuf>,

    /// CSV file with x,y,label rows
    #[arg(long)]
    data: Option<PathBuf>,

    /// Kernel (overrides the scenario's)
    #[arg(short, long)]
    kernel: Option<CliKernel>,

    /// Strictness C in [0.1, 10]
    #[arg(short = 'C', long)]
    c: Option<f64>,

    /// Kernel sensitivity gamma in [0.01, 1]
    #[arg(long)]
    gamma: Option<f64>,

    /// Polynomial degree (1-3)
    #[arg(long)]
    degree: Option<u32>,

    /// Keep the linear margin band free of points
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// List every point, spread by this amount so overlapping points stay apart
    #[arg(long, value_name = "AMOUNT")]
    spread: Option<f64>,
}

#[derive(Args)]
struct BoundaryArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output file (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output report file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct InfoArgs {
    /// Report file
    report: PathBuf,
}

/// Points and settings resolved from the command line
struct Input {
    name: String,
    points: Vec<LabeledPoint>,
    explorer: Explorer,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Classify(args) => classify_command(args),
        Commands::Boundary(args) => boundary_command(args),
        Commands::Report(args) => report_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn load_input(args: &InputArgs) -> Result<Input> {
    let (name, points, mut explorer) = match (&args.scenario, &args.data) {
        (Some(path), _) => {
            info!("Loading scenario from: {path:?}");
            let scenario = Scenario::from_file(path)?;
            let explorer = scenario.explorer();
            (scenario.name, scenario.points, explorer)
        }
        (None, Some(path)) => {
            info!("Loading points from: {path:?}");
            let dataset = CsvDataset::from_file(path)?;
            (
                path.display().to_string(),
                dataset.into_points(),
                Explorer::new(KernelKind::Linear),
            )
        }
        (None, None) => {
            return Err(VizError::InvalidParameter(
                "Either --scenario or --data is required".to_string(),
            ))
        }
    };

    if let Some(kernel) = args.kernel {
        explorer = explorer.with_kernel(kernel.into());
    }
    if let Some(c) = args.c {
        explorer = explorer.with_c(c);
    }
    if let Some(gamma) = args.gamma {
        explorer = explorer.with_gamma(gamma);
    }
    if let Some(degree) = args.degree {
        explorer = explorer.with_degree(degree);
    }
    if args.strict {
        explorer = explorer.with_strict_separation(true);
    }

    let params = explorer.params();
    info!(
        "Loaded {} points; kernel={}, C={}, gamma={}, degree={}, strict={}",
        points.len(),
        explorer.kernel(),
        params.c,
        params.gamma,
        params.degree,
        explorer.strict_separation()
    );

    Ok(Input {
        name,
        points,
        explorer,
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| VizError::SerializationError(e.to_string()))
}

fn classify_command(args: ClassifyArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let result = input.explorer.classify(&input.points)?;

    if args.json {
        println!("{}", to_json(&result)?);
        return Ok(());
    }

    let matrix = &result.confusion_matrix;
    println!("=== Classification ===");
    println!("Dataset: {}", input.name);
    println!("Kernel: {}", input.explorer.kernel());
    println!("Points: {}", input.points.len());
    println!("  Accuracy:  {:.2}%", result.accuracy * 100.0);
    println!("  Precision: {:.4}", result.precision);
    println!("  Recall:    {:.4}", result.recall);
    println!("  F1 Score:  {:.4}", matrix.f1_score());
    println!("  True Positives:  {}", matrix.true_positives);
    println!("  True Negatives:  {}", matrix.true_negatives);
    println!("  False Positives: {}", matrix.false_positives);
    println!("  False Negatives: {}", matrix.false_negatives);
    println!(
        "Support vectors ({}): {:?}",
        result.support_vector_indices.len(),
        result.support_vector_indices
    );
    if !result.margins.is_empty() {
        println!("Margin width: {:.4}", result.margins.width);
    }

    if let Some(amount) = args.spread {
        println!("\n# index display_x display_y label predicted support_vector");
        for (i, (point, predicted)) in input
            .points
            .iter()
            .zip(result.predictions.iter())
            .enumerate()
        {
            let shown = display_jitter(point.point(), amount);
            println!(
                "{} {:.4} {:.4} {} {} {}",
                i,
                shown.x,
                shown.y,
                point.label.value(),
                predicted.value(),
                result.is_support_vector(i)
            );
        }
    }

    Ok(())
}

fn boundary_command(args: BoundaryArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let boundary = input.explorer.boundary(&input.points)?;

    if boundary.is_empty() {
        info!("Boundary is empty: {} needs both classes", input.name);
    }

    let json = to_json(&boundary)?;
    if let Some(output_path) = args.output {
        std::fs::write(&output_path, json)?;
        info!("Boundary saved to: {output_path:?}");
    } else {
        println!("{json}");
    }

    Ok(())
}

fn report_command(args: ReportArgs) -> Result<()> {
    let input = load_input(&args.input)?;
    let exploration: Exploration = input.explorer.explore(&input.points)?;

    let report =
        ExplorationReport::new(input.name, exploration, input.explorer.strict_separation());
    report.save_to_file(&args.output)?;
    info!("Report saved to: {:?}", args.output);

    report.print_summary();
    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading report from: {:?}", args.report);
    let report = ExplorationReport::load_from_file(&args.report)?;

    report.print_summary();

    if let Some(regions) = &report.boundary.regions {
        println!("\nClass Regions:");
        println!("  Positive outline points: {}", regions.positive.len());
        println!("  Negative outline points: {}", regions.negative.len());
    }

    let samples = &report.result.boundary_grid_samples;
    if !samples.is_empty() {
        let positive = samples.iter().filter(|s| s.value >= 0.0).count();
        println!("\nDecision Grid:");
        println!("  Samples: {}", samples.len());
        println!(
            "  Positive share: {:.1}%",
            positive as f64 / samples.len() as f64 * 100.0
        );
    }

    Ok(())
}
