use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use proptable::efmt::{self, FormatterConfig};
use proptable::{to_postfix, Limits, TruthTable};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Symbols {
    /// V and F
    Vf,
    /// T and F
    Tf,
    /// 1 and 0
    #[value(name = "01")]
    Binary,
}

impl Symbols {
    fn config(self) -> &'static FormatterConfig<'static> {
        match self {
            Symbols::Vf => &efmt::DEFAULT_FMT_CFG,
            Symbols::Tf => &efmt::TF_FMT_CFG,
            Symbols::Binary => &efmt::BINARY_FMT_CFG,
        }
    }
}

/// Print the truth table of a propositional formula
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Formula using single-letter variables and ~ & | => <=> ( )
    formula: String,

    /// Maximal number of distinct variables
    #[arg(long, default_value_t = Limits::default().max_variables)]
    max_variables: usize,

    /// Symbols used for truth values
    #[arg(long, value_enum, default_value_t = Symbols::Vf)]
    symbols: Symbols,

    /// Print the postfix form of the formula instead of its table
    #[arg(long, default_value_t = false)]
    postfix: bool,

    /// Tell whether the formula is a tautology, a contradiction or a contingency
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("while setting up the logger")?;

    if args.postfix {
        let postfix = to_postfix(&args.formula)
            .with_context(|| format!(r#"while converting "{}""#, args.formula))?;
        println!("{}", postfix);
        return Ok(());
    }

    let limits = Limits::new(args.max_variables);
    let table = TruthTable::generate_with_limits(&args.formula, &limits)
        .with_context(|| format!(r#"while building the table of "{}""#, args.formula))?;
    info!(
        "{} variables, {} rows",
        table.variables().len(),
        table.rows().len()
    );

    print!("{}", args.symbols.config().table(&table));

    if args.summary {
        let kind = if table.is_tautology() {
            "a tautology"
        } else if table.is_contradiction() {
            "a contradiction"
        } else {
            "a contingency"
        };
        println!("The formula is {}", kind);
    }
    Ok(())
}
