//! tabsheet - evaluate a whitespace-delimited spreadsheet from the command line

mod config;

use anyhow::{Context, bail};
use std::env;
use std::io;
use std::path::PathBuf;
use tabsheet_core::storage::{parse_table_file, read_table, write_table_file};
use tabsheet_core::{EvalOptions, Spreadsheet};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: tabsheet [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Table text to read (default: stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --cell <ADDR>         Print the value of a cell (can be repeated)");
    eprintln!("      --raw                 Print raw cell contents instead of values");
    eprintln!("  -o, --output <FILE>       Write output to a file instead of stdout");
    eprintln!("      --max-depth <N>       Reference chain limit (0 = unlimited)");
    eprintln!("      --config <FILE>       Load settings from this TOML file");
    eprintln!("      --no-config           Ignore the config file");
    eprintln!("  -v, --verbose             Log debug output to stderr");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    cells: Vec<String>,
    raw: bool,
    output: Option<PathBuf>,
    max_depth: Option<usize>,
    config: Option<PathBuf>,
    no_config: bool,
    verbose: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-c" | "--cell" => {
                let Some(addr) = iter.next() else {
                    bail!("--cell requires an address");
                };
                parsed.cells.push(addr.to_string());
            }
            "--raw" => parsed.raw = true,
            "-o" | "--output" => {
                let Some(path) = iter.next() else {
                    bail!("--output requires a file path");
                };
                parsed.output = Some(PathBuf::from(path));
            }
            "--max-depth" => {
                let Some(value) = iter.next() else {
                    bail!("--max-depth requires a value");
                };
                let depth = value
                    .parse::<usize>()
                    .with_context(|| format!("invalid --max-depth value: {}", value))?;
                parsed.max_depth = Some(depth);
            }
            "--config" => {
                let Some(path) = iter.next() else {
                    bail!("--config requires a file path");
                };
                parsed.config = Some(PathBuf::from(path));
            }
            "--no-config" => parsed.no_config = true,
            "-v" | "--verbose" => parsed.verbose = true,
            other if other.starts_with('-') && other != "-" => {
                bail!("Unknown option: {}", other);
            }
            other => {
                if parsed.file.is_some() {
                    bail!("Unexpected argument: {}", other);
                }
                if other != "-" {
                    parsed.file = Some(PathBuf::from(other));
                }
            }
        }
    }

    Ok(parsed)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TABSHEET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let (config, warnings) = if args.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(args.config.as_ref())
    };
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    let max_depth = config::depth_limit(args.max_depth.unwrap_or(config.eval.max_depth));
    let table = match &args.file {
        Some(path) => parse_table_file(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => read_table(io::stdin().lock()).context("failed to read stdin")?,
    };
    let sheet = Spreadsheet::from_table(table).with_options(EvalOptions { max_depth });
    tracing::debug!(rows = sheet.table.row_count(), ?max_depth, "loaded sheet");

    let output = if args.cells.is_empty() {
        if args.raw {
            sheet.render_raw()
        } else {
            sheet.render_with(&config.output.separator)?
        }
    } else {
        let mut values = Vec::with_capacity(args.cells.len());
        for addr in &args.cells {
            let value = if args.raw {
                sheet.cell_at(addr)?.to_string()
            } else {
                sheet.get(addr)?
            };
            values.push(value);
        }
        values.join("\n")
    };

    match &args.output {
        Some(path) => {
            write_table_file(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if args.help {
        print_usage();
        return;
    }

    init_logging(args.verbose);
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
