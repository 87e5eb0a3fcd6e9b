use anyhow::{bail, Result};
use std::env;
use std::process;
use tracing::info;

use table_enhancer::config::Config;
use table_enhancer::enhance::{AttachOutcome, EnhanceOptions, Enhancer};
use table_enhancer::loader::load_csv_to_table;
use table_enhancer::logging::init_logging;
use table_enhancer::tui;

fn print_help() {
    println!("table-enhancer - live search and click-to-sort over a rendered table");
    println!();
    println!("Usage: table-enhancer <file.csv> [options]");
    println!();
    println!("Options:");
    println!("  --threshold N    Show the search box only above N data rows (default 10)");
    println!("  --no-debounce    Apply the search query on every keystroke");
    println!("  --help           Show this help");
}

struct Args {
    path: String,
    threshold: Option<usize>,
    no_debounce: bool,
}

fn parse_args() -> Result<Args> {
    let mut path = None;
    let mut threshold = None;
    let mut no_debounce = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--no-debounce" => no_debounce = true,
            "--threshold" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--threshold needs a value"))?;
                threshold = Some(value.parse()?);
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => {
                if path.is_some() {
                    bail!("only one CSV file can be given");
                }
                path = Some(other.to_string());
            }
        }
    }

    let Some(path) = path else {
        print_help();
        process::exit(1);
    };

    Ok(Args {
        path,
        threshold,
        no_debounce,
    })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    if let Err(e) = init_logging() {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = Config::load().unwrap_or_default();

    let options = EnhanceOptions {
        search_row_threshold: args.threshold.unwrap_or(config.search.row_threshold),
        debounce_ms: if args.no_debounce {
            0
        } else {
            config.search.debounce_ms
        },
    };

    let model = load_csv_to_table(&args.path)?;
    info!(path = %args.path, rows = model.row_count(), "starting viewer");

    let mut enhancer = Enhancer::new(options);
    match enhancer.attach(&args.path, model) {
        AttachOutcome::Attached(view) => tui::run(*view, &config),
        AttachOutcome::Skipped => bail!("{}: table has no header row", args.path),
        AttachOutcome::AlreadyAttached => unreachable!("fresh enhancer"),
    }
}
