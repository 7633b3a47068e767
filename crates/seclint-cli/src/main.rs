use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use seclint_runner::{Config, Runner};

#[derive(Parser)]
#[command(name = "seclint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Check every operation of an OpenAPI document (YAML or JSON)
    Check {
        file: PathBuf,
        #[arg(long, default_value = "seclint.toml")]
        config: PathBuf,
        /// Only run this rule
        #[arg(long)]
        rule: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List builtin rules
    ListRules,

    /// Write a default seclint.toml in the current directory
    Init,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Check {
            file,
            config,
            rule,
            format,
        } => {
            let cfg = Config::load_or_default(&config)?;
            let mut runner = Runner::new(cfg);
            if let Some(id) = rule {
                runner = runner.only(&id)?;
            }
            let report = runner.lint_file(&file)?;

            match format {
                Format::Text => {
                    for d in &report.diagnostics {
                        println!("{d}");
                    }
                    println!("{}", report.summary());
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }

            if report.has_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::ListRules => {
            for r in seclint_rules::builtin_rules() {
                println!("{} ({})", r.id(), r.default_severity());
                println!("    {}", r.description());
            }
        }
        Command::Init => {
            let path = Config::init_in(&std::env::current_dir()?)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
