//! Run the list-flip fixture challenges and grade answers against them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use listflip::check::check_response;
use listflip::core::challenge::{Challenge, Transform};
use listflip::evaluate::{evaluate_all, render, select_challenges};
use listflip::exit_codes;
use listflip::io::config::{Config, DEFAULT_CONFIG_FILE, OutputFormat, init_config, load_config};
use listflip::io::script::load_script;
use listflip::logging;

#[derive(Parser)]
#[command(
    name = "listflip",
    version,
    about = "Flip boolean lists and upper-case string lists, printed as Python would"
)]
struct Cli {
    /// Config file.
    #[arg(
        short = 'C',
        long = "config",
        global = true,
        env = "LISTFLIP_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    config: PathBuf,

    /// Log debug diagnostics to stderr (unless `RUST_LOG` is set).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the result of every invocation, one line per call.
    Run(RunArgs),
    /// Grade an answer for one invocation (exit 2 when incorrect).
    Check {
        /// Challenge name.
        name: String,
        /// Zero-based invocation index.
        index: usize,
        /// Answer as a Python list literal, e.g. "[False, True]".
        #[arg(allow_hyphen_values = true)]
        answer: String,
    },
    /// List challenges with their transform and answer placeholder.
    List,
    /// Write the default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Challenges to run (all when omitted).
    #[arg(value_name = "NAME", conflicts_with = "script")]
    names: Vec<String>,

    /// Evaluate a Python fixture script instead of configured challenges.
    #[arg(long, value_name = "FILE", requires = "transform")]
    script: Option<PathBuf>,

    /// Transform applied by the script's `flip` (`bools` or `strings`).
    #[arg(long, requires = "script")]
    transform: Option<Transform>,

    /// Output format (overrides the config; `text` for scripts by default).
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    debug!(config = %cli.config.display(), "resolved config path");
    match cli.command {
        Command::Run(args) => cmd_run(&cli.config, args),
        Command::Check {
            name,
            index,
            answer,
        } => {
            let config = load_config(&cli.config)?;
            cmd_check(&config, &name, index, &answer)
        }
        Command::List => {
            let config = load_config(&cli.config)?;
            cmd_list(&config)
        }
        Command::Init { force } => {
            init_config(&cli.config, force)?;
            println!("wrote {}", cli.config.display());
            Ok(exit_codes::OK)
        }
    }
}

/// Scripts are self-contained, so the config is only read for named challenges.
fn cmd_run(config_path: &Path, args: RunArgs) -> Result<i32> {
    let (challenges, format) = match (&args.script, args.transform) {
        (Some(path), Some(transform)) => (
            vec![load_script(path, transform)?],
            args.format.unwrap_or_default(),
        ),
        _ => {
            let config = load_config(config_path)?;
            let challenges = select_challenges(config.challenges()?, &args.names)?;
            (challenges, args.format.unwrap_or(config.format))
        }
    };
    let reports = evaluate_all(&challenges)?;
    let output = render(&reports, format)?;
    print!("{output}");
    Ok(exit_codes::OK)
}

fn cmd_check(config: &Config, name: &str, index: usize, answer: &str) -> Result<i32> {
    let challenges = config.challenges()?;
    let outcome = check_response(&challenges, name, index, answer)
        .with_context(|| format!("check {name}[{index}]"))?;
    let verdict = outcome.verdict;
    if verdict.correct {
        println!("correct");
        return Ok(exit_codes::OK);
    }
    if verdict.hint.is_empty() {
        println!("incorrect");
    } else {
        println!("incorrect: {}", verdict.hint);
    }
    Ok(exit_codes::INCORRECT)
}

fn cmd_list(config: &Config) -> Result<i32> {
    let challenges: Vec<Challenge> = config.challenges()?;
    for challenge in &challenges {
        println!(
            "{}\t{}\t{}",
            challenge.name,
            challenge.transform,
            challenge.transform.placeholder()
        );
    }
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::parse_from(["listflip", "run"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        match cli.command {
            Command::Run(args) => {
                assert!(args.names.is_empty());
                assert!(args.script.is_none());
                assert!(args.format.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn parse_run_script_requires_transform() {
        let result = Cli::try_parse_from(["listflip", "run", "--script", "x.py"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "listflip",
            "run",
            "--script",
            "x.py",
            "--transform",
            "strings",
        ])
        .expect("parse");
        match cli.command {
            Command::Run(args) => assert_eq!(args.transform, Some(Transform::UpperStrings)),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["listflip", "check", "boolean_list_test", "1", "[True]"]);
        assert!(matches!(
            cli.command,
            Command::Check { ref name, index: 1, ref answer }
                if name == "boolean_list_test" && answer == "[True]"
        ));
    }

    #[test]
    fn parse_global_verbose_and_config() {
        let cli = Cli::parse_from(["listflip", "list", "-v", "--config", "other.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["listflip", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_format_json() {
        let cli = Cli::parse_from(["listflip", "run", "--format", "json", "boolean_list_test"]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.names, vec!["boolean_list_test".to_string()]);
            }
            _ => panic!("expected run"),
        }
    }
}
