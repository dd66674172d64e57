//! rbfk command line interface
//!
//! Describe kernels, sample their profiles over a 1-D grid, and evaluate
//! kernel matrices between point sets stored as CSV.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use rbf_kernels::core::Result;
use rbf_kernels::utils::grid::linspace;
use rbf_kernels::{Kernel, KernelSpec, PointSet, ProfileReport};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rbfk")]
#[command(about = "Evaluate radial basis function and polynomial kernels")]
#[command(version = env!("CARGO_PKG_VERSION"))]
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
    /// Print the kernel label
    Describe(KernelArgs),
    /// Sample a kernel over a 1-D grid against a reference point
    Profile(ProfileArgs),
    /// Evaluate the kernel matrix between two point sets
    Matrix(MatrixArgs),
}

#[derive(Args)]
struct KernelArgs {
    /// Kernel tag: gauss, gauss_tanh, imq, mat0..mat3, wen_<d>_<k>, polynomial
    #[arg(short, long, default_value = "gauss")]
    kernel: String,

    /// Shape parameter of radial kernels
    #[arg(long, allow_hyphen_values = true)]
    ep: Option<f64>,

    /// Additive offset of the polynomial kernel
    #[arg(long, allow_hyphen_values = true)]
    a: Option<f64>,

    /// Exponent of the polynomial kernel
    #[arg(long, allow_hyphen_values = true)]
    p: Option<f64>,
}

#[derive(Args)]
struct ProfileArgs {
    #[command(flatten)]
    kernel: KernelArgs,

    /// First grid value
    #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
    start: f64,

    /// Last grid value
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    end: f64,

    /// Number of grid values
    #[arg(long, default_value = "100")]
    points: usize,

    /// Reference point
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    reference: f64,

    /// Write a JSON report instead of CSV on stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    kernel: KernelArgs,

    /// Points X, one per CSV line
    #[arg(short = 'x', long)]
    x: PathBuf,

    /// Points Y (defaults to X)
    #[arg(short = 'y', long)]
    y: Option<PathBuf>,

    /// Print only the diagonal shortcut of K(X, X)
    #[arg(long, conflicts_with = "y")]
    diagonal: bool,
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
        Commands::Describe(args) => describe_command(args),
        Commands::Profile(args) => profile_command(args),
        Commands::Matrix(args) => matrix_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

/// Parse the tag and apply parameter overrides in `set_parameters` order
fn resolve_spec(args: &KernelArgs) -> Result<KernelSpec> {
    let mut spec: KernelSpec = args.kernel.parse()?;
    match &mut spec {
        KernelSpec::Polynomial { a, p } => {
            *a = args.a.unwrap_or(*a);
            *p = args.p.unwrap_or(*p);
        }
        KernelSpec::Gauss { ep }
        | KernelSpec::GaussTanh { ep }
        | KernelSpec::Imq { ep }
        | KernelSpec::Matern { ep, .. }
        | KernelSpec::Wendland { ep, .. } => {
            *ep = args.ep.unwrap_or(*ep);
        }
    }
    Ok(spec)
}

fn build_kernel(args: &KernelArgs) -> Result<Box<dyn Kernel>> {
    let kernel = resolve_spec(args)?.build()?;
    info!("Using kernel {}", kernel.describe());
    Ok(kernel)
}

fn describe_command(args: KernelArgs) -> Result<()> {
    let kernel = build_kernel(&args)?;
    println!("{}", kernel.describe());
    Ok(())
}

fn profile_command(args: ProfileArgs) -> Result<()> {
    let spec = resolve_spec(&args.kernel)?;
    let grid = linspace(args.start, args.end, args.points);
    info!(
        "Sampling {} points in [{}, {}] against {}",
        grid.len(),
        args.start,
        args.end,
        args.reference
    );

    let report = ProfileReport::compute(&spec, args.reference, grid)?;
    info!("Using kernel {}", report.kernel);

    match args.output {
        Some(path) => {
            report.save_to_file(&path)?;
            info!("Report saved to: {path:?}");
        }
        None => {
            let stdout = io::stdout();
            report.write_csv(BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}

fn matrix_command(args: MatrixArgs) -> Result<()> {
    let kernel = build_kernel(&args.kernel)?;

    info!("Loading points from: {:?}", args.x);
    let x = PointSet::from_csv_file(&args.x)?;
    info!("Loaded {} points with {} dimensions", x.len(), x.dim());

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "# {}", kernel.describe())?;

    if args.diagonal {
        for value in kernel.diagonal(&x) {
            writeln!(writer, "{value}")?;
        }
        return Ok(());
    }

    let y = match &args.y {
        Some(path) => {
            info!("Loading points from: {path:?}");
            PointSet::from_csv_file(path)?
        }
        None => x.clone(),
    };

    if x.dim() != y.dim() {
        return Err(rbf_kernels::KernelError::DimensionMismatch {
            expected: x.dim(),
            actual: y.dim(),
        });
    }

    let matrix = kernel.evaluate(&x, &y);
    for i in 0..matrix.rows() {
        let line: Vec<String> = matrix.row(i).iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(","))?;
    }

    Ok(())
}
