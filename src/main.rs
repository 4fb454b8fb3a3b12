//! Command-line front end for scrambler.
//!
//! Scrambles go to stdout (or a file); logs go to stderr and are
//! controlled with `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scrambler::config::Settings;
use scrambler::core::Constraints;
use scrambler::export::{audit_text, default_file_name, render_lines, write_text};
use scrambler::generator::generate_batch;
use scrambler::limits::RequestForm;
use scrambler::session::{batch_summary, ScrambleList};

#[derive(Parser)]
#[command(name = "scrambler")]
#[command(about = "Generate constrained random scrambles for 3x3 puzzles")]
struct Cli {
    /// TOML settings file with defaults and bounds
    #[arg(long, global = true, env = "SCRAMBLER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of scrambles
    Generate {
        /// Moves per scramble
        #[arg(short, long)]
        length: Option<String>,
        /// Number of scrambles
        #[arg(short = 'n', long)]
        count: Option<String>,
        /// Seed for a reproducible batch
        #[arg(short, long)]
        seed: Option<String>,
        #[command(flatten)]
        rules: RuleFlags,
        /// Write scrambles to this file instead of stdout
        #[arg(short, long, conflicts_with = "save_dir")]
        output: Option<PathBuf>,
        /// Write scrambles to a timestamped file in this directory
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },
    /// Check scrambles (one per line) against the move vocabulary and rules
    Check {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
        #[command(flatten)]
        rules: RuleFlags,
    },
}

#[derive(Args)]
struct RuleFlags {
    /// Forbid the same face on consecutive moves
    #[arg(long, conflicts_with = "allow_same_face")]
    avoid_same_face: bool,
    /// Permit the same face on consecutive moves
    #[arg(long)]
    allow_same_face: bool,
    /// Forbid faces of the same axis on consecutive moves
    #[arg(long, conflicts_with = "allow_same_axis")]
    avoid_same_axis: bool,
    /// Permit faces of the same axis on consecutive moves
    #[arg(long)]
    allow_same_axis: bool,
}

impl RuleFlags {
    fn overrides(&self) -> (Option<bool>, Option<bool>) {
        let pick = |avoid: bool, allow: bool| match (avoid, allow) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        (
            pick(self.avoid_same_face, self.allow_same_face),
            pick(self.avoid_same_axis, self.allow_same_axis),
        )
    }

    fn resolve(&self, defaults: Constraints) -> Constraints {
        let (face, axis) = self.overrides();
        defaults.with_overrides(face, axis)
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            length,
            count,
            seed,
            rules,
            output,
            save_dir,
        } => {
            let defaults = &settings.defaults;
            let form = RequestForm {
                length: length.unwrap_or_else(|| defaults.length.to_string()),
                count: count.unwrap_or_else(|| defaults.count.to_string()),
                seed: seed.unwrap_or_else(|| defaults.seed.map(|s| s.to_string()).unwrap_or_default()),
                constraints: rules.resolve(defaults.constraints()),
            };
            let target = match (output, save_dir) {
                (Some(path), _) => Some(path),
                (None, Some(dir)) => Some(dir.join(default_file_name(&Local::now()))),
                (None, None) => None,
            };
            generate(&settings, &form, target)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { file, rules } => {
            let constraints = rules.resolve(settings.defaults.constraints());
            if check(file, &constraints)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn generate(settings: &Settings, form: &RequestForm, target: Option<PathBuf>) -> Result<()> {
    let request = form
        .parse_request(&settings.limits)
        .context("Invalid parameters")?;

    let list = ScrambleList::new().record_batch(&request, generate_batch(&request), Utc::now());
    tracing::info!("{}", batch_summary(&request, &list));

    match target {
        Some(path) => {
            write_text(&path, &list)?;
            eprintln!("Saved to {}", path.display());
        }
        None => print!("{}", render_lines(list.scrambles())),
    }
    Ok(())
}

fn check(file: Option<PathBuf>, constraints: &Constraints) -> Result<bool> {
    let content = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let audit = audit_text(&content, constraints);
    for problem in &audit.problems {
        println!("{problem}");
    }

    tracing::info!(
        checked = audit.checked,
        problems = audit.problems.len(),
        "check finished"
    );
    if audit.is_clean() {
        println!("{} scrambles OK", audit.checked);
    }
    Ok(audit.is_clean())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(args: &[&str]) -> RuleFlags {
        let mut argv = vec!["scrambler", "check"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Check { rules, .. } => rules,
            Commands::Generate { .. } => unreachable!(),
        }
    }

    #[test]
    fn flags_override_each_rule_from_either_default() {
        let cases: [(&[&str], Option<bool>); 3] = [
            (&[], None),
            (&["--avoid-same-face"], Some(true)),
            (&["--allow-same-face"], Some(false)),
        ];
        for (args, expected) in cases {
            for default in [false, true] {
                let defaults = Constraints::new(default, !default);
                let resolved = flags(args).resolve(defaults);
                assert_eq!(resolved.avoid_same_face, expected.unwrap_or(default));
                assert_eq!(resolved.avoid_same_axis, !default);
            }
        }

        let cases: [(&[&str], Option<bool>); 3] = [
            (&[], None),
            (&["--avoid-same-axis"], Some(true)),
            (&["--allow-same-axis"], Some(false)),
        ];
        for (args, expected) in cases {
            for default in [false, true] {
                let defaults = Constraints::new(!default, default);
                let resolved = flags(args).resolve(defaults);
                assert_eq!(resolved.avoid_same_axis, expected.unwrap_or(default));
                assert_eq!(resolved.avoid_same_face, !default);
            }
        }
    }

    #[test]
    fn both_rules_can_be_set_together() {
        let resolved = flags(&["--allow-same-face", "--avoid-same-axis"]).resolve(Constraints::default());
        assert_eq!(resolved, Constraints::new(false, true));
    }

    #[test]
    fn avoid_and_allow_for_one_rule_conflict() {
        let result = Cli::try_parse_from(["scrambler", "check", "--avoid-same-face", "--allow-same-face"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_fails_on_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "R U F\nR R2\n").unwrap();

        assert!(!check(Some(path), &Constraints::default()).unwrap());
    }

    #[test]
    fn check_passes_on_clean_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("good.txt");
        fs::write(&path, "R U F\n\nL D2 B'\n").unwrap();

        assert!(check(Some(path), &Constraints::default()).unwrap());
    }
}
