use clap::Parser;

mod args;
pub use args::Verbosity;

/// The CLI interface for the Quadrat application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Coefficient tokens, three per equation.
    ///
    /// Tokens are grouped into threes in input order; a short final
    /// group is padded with missing values. Each group is solved as
    /// a*x^2 + b*x + c = 0 and yields exactly one output line.
    /// Groups with missing or malformed coefficients report
    /// "invalid input" instead of failing the run.
    #[clap(allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// The number of solver threads to run.
    ///
    /// Defaults to the available hardware parallelism minus the two
    /// threads occupied by input splitting and output printing.
    #[clap(short, long, env = "QUADRAT_SOLVER_THREADS")]
    pub workers: Option<usize>,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}
