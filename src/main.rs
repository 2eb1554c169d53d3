use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use nestset::{
    parser::config::DEFAULT_MAX_DEPTH, CompactFormatter, Element, FormatConfig, Formatter,
    Multiset, MultisetParser, ParseMode, ParserConfig, PrettyFormatter,
};

#[derive(Debug, Parser)]
#[command(
    name = "nestset",
    author,
    version,
    about = "Parse nested multisets and evaluate multiset algebra",
    long_about = "Parse nested multisets and evaluate multiset algebra.\n\n\
                  Every SET operand is a literal such as '{a, a, {b}}', \
                  '@path' to read a file, or '-' to read stdin."
)]
struct Args {
    /// Reject malformed literals instead of recovering from them
    #[arg(long, global = true)]
    strict: bool,

    /// Maximum nesting depth accepted by the parser
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print elements in canonical order
    #[arg(long, global = true)]
    sorted: bool,

    /// Print nested multisets across indented lines
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a multiset and print it back
    Show { set: String },
    /// Print cardinality, distinct count, emptiness and depth
    Stats { set: String },
    /// Count occurrences of an element
    Count { set: String, element: String },
    /// Check whether a multiset contains an element
    Contains { set: String, element: String },
    /// Union: multiplicities add
    Union { left: String, right: String },
    /// Intersection: minimum multiplicities
    Intersect { left: String, right: String },
    /// Difference: multiplicities subtract, floored at zero
    Diff { left: String, right: String },
    /// Compare two multisets ignoring element order
    Equals { left: String, right: String },
    /// Print all subsets
    PowerSet { set: String },
}

fn main() {
    // Logs go to stderr so stdout only carries results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let config = ParserConfig::default()
        .with_mode(mode)
        .with_max_depth(args.max_depth);
    info!("Using {}", config);

    let output = match &args.command {
        Command::Show { set } => render(&load(set, &config)?, &args),
        Command::Stats { set } => {
            let set = load(set, &config)?;
            format!(
                "cardinality: {}\ndistinct: {}\nempty: {}\ndepth: {}",
                set.len(),
                set.distinct_count(),
                set.is_empty(),
                set.depth()
            )
        }
        Command::Count { set, element } => {
            let set = load(set, &config)?;
            set.count(&element_operand(element, &config)?).to_string()
        }
        Command::Contains { set, element } => {
            let set = load(set, &config)?;
            set.contains(&element_operand(element, &config)?).to_string()
        }
        Command::Union { left, right } => {
            render(&(&load(left, &config)? + &load(right, &config)?), &args)
        }
        Command::Intersect { left, right } => {
            render(&(&load(left, &config)? * &load(right, &config)?), &args)
        }
        Command::Diff { left, right } => {
            render(&(&load(left, &config)? - &load(right, &config)?), &args)
        }
        Command::Equals { left, right } => {
            (load(left, &config)? == load(right, &config)?).to_string()
        }
        Command::PowerSet { set } => render(&load(set, &config)?.power_set()?, &args),
    };

    println!("{}", output);
    Ok(())
}

/// Reads an operand: a literal, `@path` for a file, or `-` for stdin
fn read_operand(operand: &str) -> Result<String> {
    if operand == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        if buffer.trim().is_empty() {
            bail!("no input provided on stdin");
        }
        return Ok(buffer);
    }

    match operand.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path)),
        None => Ok(operand.to_string()),
    }
}

fn load(operand: &str, config: &ParserConfig) -> Result<Multiset> {
    let text = read_operand(operand)?;
    let set = MultisetParser::with_config(&text, config.clone())
        .and_then(|mut parser| parser.parse())
        .with_context(|| format!("failed to parse multiset {}", operand))?;
    Ok(set)
}

/// Operands opening with `{` are nested multisets, anything else is an atom
fn element_operand(operand: &str, config: &ParserConfig) -> Result<Element> {
    let text = operand.trim();
    if text.starts_with('{') {
        return Ok(Element::nested(load(text, config)?));
    }
    Ok(Element::atomic(text))
}

fn render(set: &Multiset, args: &Args) -> String {
    let config = FormatConfig {
        sort_elements: args.sorted,
        ..FormatConfig::default()
    };
    if args.pretty {
        PrettyFormatter.format(set, &config)
    } else {
        CompactFormatter.format(set, &config)
    }
}
