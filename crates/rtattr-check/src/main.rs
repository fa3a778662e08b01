use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use rtattr_core::prelude::AttributeValidator;
use rtattr_model::BackendKind;
use rtattr_observe::{LoggerConfig, LoggerTimeZone, init_local_offset, init_logger};

mod render;

/// Check workflow runtime attributes against an execution backend.
#[derive(Parser, Debug)]
#[command(name = "rtattr-check", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate attribute names for a backend (local, sge, jes, lsf)
    Check {
        backend: BackendKind,

        /// Attribute names as written in the workflow
        attributes: Vec<String>,

        /// Drop attributes the backend does not support instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Print the capability matrix as JSON
    Matrix {
        /// Restrict the output to one backend
        #[arg(long)]
        backend: Option<BackendKind>,
    },
}

fn main() -> Result<()> {
    let cfg = LoggerConfig::from_env()?;
    if cfg.tz == LoggerTimeZone::Local {
        init_local_offset();
    }
    init_logger(&cfg)?;
    debug!("logger initialized");

    match Args::parse().command {
        Command::Check {
            backend,
            attributes,
            lenient,
        } => {
            let mut validator = AttributeValidator::new(backend);
            if lenient {
                validator = validator.lenient();
            }
            let outcome = validator.validate(&attributes)?;
            info!(
                backend = %validator.backend(),
                accepted = outcome.accepted.len(),
                ignored = outcome.ignored.len(),
                "runtime attributes validated"
            );
            for line in render::outcome_lines(backend, &outcome) {
                println!("{line}");
            }
        }
        Command::Matrix { backend } => {
            let value = match backend {
                Some(backend) => render::backend_view(backend),
                None => render::matrix(),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
