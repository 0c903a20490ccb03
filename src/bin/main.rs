use std::io;
use std::process::exit;

use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use inequality_check::data::linear_program::elements::Variant;
use inequality_check::io::console::Console;
use inequality_check::session::{Configuration, run};

/// Check whether a vector satisfies a small system of linear inequalities.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Kind of system; asked interactively when omitted
    #[arg(long, value_enum)]
    variant: Option<Kind>,
    /// Number of inequalities
    #[arg(long, default_value_t = 2)]
    inequalities: usize,
    /// Number of variables
    #[arg(long, default_value_t = 2)]
    variables: usize,
    /// Amount of logging written to standard error
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// No further output
    Ordinary,
    /// Announces rendering, checking and its release
    Special,
}

impl From<Kind> for Variant {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Ordinary => Variant::Ordinary,
            Kind::Special => Variant::Special,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Verbosity {
    /// Warnings only
    Normal,
    /// Session progress
    Verbose,
    /// Every value and check
    Debug,
    /// Everything
    Trace,
}

impl From<Verbosity> for Level {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
            Verbosity::Trace => Level::TRACE,
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(opts.verbosity))
        .with_writer(io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {}", error);
        exit(1);
    }

    let configuration = Configuration {
        variant: opts.variant.map(Variant::from),
        inequality_count: opts.inequalities,
        variable_count: opts.variables,
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    if let Err(error) = run::<f64, _, _, _>(&mut console, io::stdout(), &configuration) {
        eprintln!("{}", error);
        exit(1);
    }
}
