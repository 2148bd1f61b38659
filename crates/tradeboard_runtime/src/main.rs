//! Tradeboard Runtime
//!
//! Command-line front end for inspecting widget demo-data streams

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tradeboard_core::{hash_seed, Seed};
use tradeboard_services::{Sampler, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tradeboard")]
#[command(about = "Inspect deterministic widget demo-data streams")]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Raise log verbosity (-v debug, -vv trace); `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the seed a key hashes to
    Hash { key: String },
    /// Draw values for a key
    Draw {
        key: String,
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Draw values from an explicit seed
    DrawSeed {
        seed: Seed,
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Run the uniformity sanity check for a key
    Check { key: String },
}

/// Directive used when `RUST_LOG` is unset.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Tradeboard v{}", tradeboard_core::VERSION);
    let settings = tradeboard_services::init_services(cli.config.as_deref())
        .context("failed to initialize services")?;
    let code = if run(cli, &settings)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };
    Ok(code)
}

/// Execute one command. Returns `false` when a check failed.
fn run(cli: Cli, settings: &Settings) -> Result<bool> {
    let mut sampler = Sampler::new(settings.sampler.clone());

    match cli.command {
        Command::Hash { key } => {
            let seed = hash_seed(&key);
            if cli.json {
                println!("{}", serde_json::json!({ "key": key, "seed": seed }));
            } else {
                println!("{seed}");
            }
        }
        Command::Draw { key, count } => {
            let report = sampler.sample(&key, count)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for value in &report.values {
                    println!("{value}");
                }
            }
        }
        Command::DrawSeed { seed, count } => {
            let values = sampler.sample_seed(seed, count)?;
            if cli.json {
                println!("{}", serde_json::json!({ "seed": seed, "values": values }));
            } else {
                for value in &values {
                    println!("{value}");
                }
            }
        }
        Command::Check { key } => {
            let report = sampler.check_uniformity(&key, &settings.uniformity)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let status = if report.passed { "ok" } else { "FAILED" };
                let mean = report.stats.mean();
                println!("{status}: mean {mean:.4} over {} draws", report.draws);
            }
            if !report.passed {
                return Ok(false);
            }
        }
    }

    for (key, total) in sampler.draw_counts().iter() {
        tracing::debug!(key = %key, total, "draws");
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_draw_with_count() {
        let cli = Cli::try_parse_from(["tradeboard", "draw", "w1::balance", "-n", "3"]).unwrap();
        match cli.command {
            Command::Draw { key, count } => {
                assert_eq!(key, "w1::balance");
                assert_eq!(count, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!cli.json);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = ["tradeboard", "hash", "abc", "--json", "--config", "t.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("t.json")));
    }

    #[test]
    fn parses_seed_argument() {
        let cli = Cli::try_parse_from(["tradeboard", "draw-seed", "50696745"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::DrawSeed { seed, count: None } if seed == Seed::new(50_696_745)
        ));
        assert!(Cli::try_parse_from(["tradeboard", "draw-seed", "-1"]).is_err());
    }

    #[test]
    fn hash_and_draw_succeed() {
        let settings = Settings::default();
        let hash = Cli::try_parse_from(["tradeboard", "hash", "abc"]).unwrap();
        assert!(run(hash, &settings).unwrap());
        let draw = Cli::try_parse_from(["tradeboard", "--json", "draw", "abc"]).unwrap();
        assert!(run(draw, &settings).unwrap());
    }

    #[test]
    fn draw_over_limit_errors() {
        let cli = Cli::try_parse_from(["tradeboard", "draw", "k", "-n", "10"]).unwrap();
        let json = r#"{ "sampler": { "default_draws": 1, "max_draws": 5 } }"#;
        let settings = Settings::from_json_str(json).unwrap();
        assert!(run(cli, &settings).is_err());
    }

    #[test]
    fn check_reports_failure() {
        let cli = Cli::try_parse_from(["tradeboard", "check", "x"]).unwrap();
        let json = r#"{ "uniformity": { "draws": 100, "mean_low": 0.99, "mean_high": 1.0 } }"#;
        let settings = Settings::from_json_str(json).unwrap();
        assert!(!run(cli, &settings).unwrap());
    }

    #[test]
    fn check_over_limit_errors() {
        let cli = Cli::try_parse_from(["tradeboard", "check", "x"]).unwrap();
        let mut settings = Settings::default();
        settings.uniformity.draws = settings.sampler.max_draws + 1;
        assert!(run(cli, &settings).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let quiet = Cli::try_parse_from(["tradeboard", "hash", "abc"]).unwrap();
        assert_eq!(quiet.verbose, 0);
        let loud = Cli::try_parse_from(["tradeboard", "-vv", "hash", "abc"]).unwrap();
        assert_eq!(loud.verbose, 2);
        let trailing = Cli::try_parse_from(["tradeboard", "draw", "abc", "-v"]).unwrap();
        assert_eq!(trailing.verbose, 1);
    }

    #[test]
    fn verbosity_raises_filter_level() {
        use tracing_subscriber::filter::LevelFilter;

        let levels: Vec<_> = (0..=3)
            .map(|v| EnvFilter::new(default_directive(v)).max_level_hint())
            .collect();
        assert_eq!(
            levels,
            [
                Some(LevelFilter::INFO),
                Some(LevelFilter::DEBUG),
                Some(LevelFilter::TRACE),
                Some(LevelFilter::TRACE),
            ]
        );
    }
}
