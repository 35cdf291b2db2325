//! Headless simulator CLI.
//!
//! Plays full sessions with a scripted player and prints what happened.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # One 10-minute session
//!   cargo run --bin simulate -- -n 20 -s 42     # 20 reproducible sessions
//!   RUST_LOG=debug cargo run --bin simulate     # With gameplay logging

use arpg_sim::simulator::{run_simulation, SimConfig};
use arpg_sim::GameConfig;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 ARPG SESSION SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Ticks per run:  {}", config.ticks_per_run);
    println!("  Tick length:    {:.2} ms", config.tick_ms);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if write_json {
        let filename = "sim_report.json";
        match std::fs::write(filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("error: failed to write {}: {}", filename, e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.ticks_per_run = args[i + 1].parse().unwrap_or(36_000);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config.game = GameConfig::load(&args[i + 1]).map_err(|e| e.to_string())?;
                    i += 1;
                }
            }
            "--json" => {
                write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-V" | "--version" => {
                println!("{}", arpg_sim::build_info::version_line());
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                log::warn!("Ignoring unknown argument {}", other);
            }
        }
        i += 1;
    }

    Ok((config, write_json))
}

fn print_help() {
    println!("ARPG Session Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of sessions to play (default: 1)");
    println!("    -s, --seed <S>       Base random seed for reproducibility");
    println!("    -t, --ticks <T>      Ticks per session at 60 fps (default: 36,000)");
    println!("    -c, --config <PATH>  JSON game config (missing fields use defaults)");
    println!("    --json               Save the report to sim_report.json");
    println!("    -v, --verbose        Print a line per session");
    println!("    -V, --version        Print version and build info");
    println!("    -h, --help           Show this help");
    println!();
    println!("Log output is controlled by RUST_LOG (default: info).");
}
