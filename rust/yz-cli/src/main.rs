//! yz: score Yatzy hands from the command line.
//!
//! Subcommands:
//! - score
//! - categories

mod config;

use std::env;
use std::process;

use serde_json::{json, Map, Value};
use yz_core::{score, Category, Hand};
use yz_logging::{NdjsonWriter, RejectedHandEventV1, ScoreEventV1};

use crate::config::{Config, OutputFormat};

fn print_help() {
    eprintln!(
        r#"yz - Yatzy hand scorer

USAGE:
    yz <COMMAND> [OPTIONS]

COMMANDS:
    score           Score five dice in one or every category
    categories      List category names in scorecard order

OPTIONS:
    -h, --help      Print this help message
    -V, --version   Print version

Run `yz <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("yz {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_categories(args: &[String]) {
    if let Some(first) = args.first() {
        if first == "--help" || first == "-h" {
            println!("yz categories\n\nUSAGE:\n    yz categories\n");
            return;
        }
        eprintln!("Unknown option for `yz categories`: {}", first);
        process::exit(1);
    }
    for cat in Category::ALL {
        println!("{:>2}  {}", cat.index(), cat);
    }
}

fn open_event_log(path: &str, flush_every_lines: u64) -> NdjsonWriter {
    NdjsonWriter::open_append_with_flush(path, flush_every_lines).unwrap_or_else(|e| {
        eprintln!("Failed to open event log {}: {}", path, e);
        process::exit(1);
    })
}

fn cmd_score(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut category: Option<Category> = None;
    let mut json_out = false;
    let mut log_path: Option<String> = None;
    let mut dice_tokens: Vec<String> = Vec::new();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yz score

USAGE:
    yz score [OPTIONS] <D1> <D2> <D3> <D4> <D5>
    yz score [OPTIONS] <D1,D2,D3,D4,D5>

OPTIONS:
    --category C    Score only category C (see `yz categories`)
    --json          Print JSON instead of a table
    --log PATH      Append NDJSON score events to PATH
    --config PATH   YAML config file (flags override it)

Straights are checked in the order the dice are given.
"#
                );
                return;
            }
            "--category" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --category");
                    process::exit(1);
                }
                category = Some(args[i + 1].parse().unwrap_or_else(|e| {
                    eprintln!("Invalid --category value: {}", e);
                    process::exit(1);
                }));
                i += 2;
            }
            "--json" => {
                json_out = true;
                i += 1;
            }
            "--log" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --log");
                    process::exit(1);
                }
                log_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option for `yz score`: {}", other);
                eprintln!("Run `yz score --help` for usage.");
                process::exit(1);
            }
            other => {
                dice_tokens.push(other.to_string());
                i += 1;
            }
        }
    }

    let cfg = match &config_path {
        Some(p) => Config::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {}", p, e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    let category = category.or(cfg.output.category);
    let format = if json_out {
        OutputFormat::Json
    } else {
        cfg.output.format
    };
    let mut events = log_path
        .or(cfg.logging.events_path)
        .map(|p| open_event_log(&p, cfg.logging.flush_every_lines));

    let input = dice_tokens.join(" ");
    let hand = match Hand::parse(&input) {
        Ok(h) => h,
        Err(e) => {
            if let Some(w) = events.as_mut() {
                let logged = w
                    .write_event(&RejectedHandEventV1::new(input.as_str(), &e))
                    .and_then(|_| w.flush());
                if let Err(log_err) = logged {
                    eprintln!("Failed to write event log: {}", log_err);
                }
            }
            eprintln!("Invalid hand: {}", e);
            process::exit(1);
        }
    };

    let cats: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    let scored: Vec<(Category, i32)> = cats.into_iter().map(|c| (c, score(&hand, c))).collect();

    if let Some(w) = events.as_mut() {
        let logged = scored
            .iter()
            .try_for_each(|&(c, s)| w.write_event(&ScoreEventV1::new(hand.dice(), c.name(), s)))
            .and_then(|_| w.flush());
        if let Err(e) = logged {
            eprintln!("Failed to write event log: {}", e);
            process::exit(1);
        }
    }

    match format {
        OutputFormat::Json => {
            let scores: Map<String, Value> = scored
                .iter()
                .map(|&(c, s)| (c.name().to_string(), json!(s)))
                .collect();
            println!("{}", json!({ "dice": hand, "scores": scores }));
        }
        OutputFormat::Text if category.is_some() => {
            for (_, s) in &scored {
                println!("{}", s);
            }
        }
        OutputFormat::Text => {
            println!("Dice: {}", hand);
            for (c, s) in &scored {
                println!("  {:<16}{:>3}", c.name(), s);
            }
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        process::exit(1);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "categories" => {
            cmd_categories(&args[2..]);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run `yz --help` for usage.");
            process::exit(1);
        }
    }
}
