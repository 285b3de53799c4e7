use crate::cli::ParseArgs;
use crate::config::{Config, DanglingPolicy};
use crate::output::write_csv;
use crate::parser::{outcome_from_bytes, AnalysisOutcome};
use anyhow::Context;
use std::io::Read;
use tracing::{info, warn};

pub fn execute(args: ParseArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let policy = if args.keep_dangling {
        DanglingPolicy::Keep
    } else {
        config.parser.dangling
    };

    let raw = if args.input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read analysis from stdin")?;
        buf
    } else {
        info!("Reading analysis from {:?}", args.input);
        std::fs::read(&args.input)
            .with_context(|| format!("Failed to read analysis file {:?}", args.input))?
    };

    match outcome_from_bytes(&raw, policy) {
        AnalysisOutcome::Parsed { structured, .. } => {
            if structured.is_empty() {
                warn!("No sentiment or negative reviews found in the analysis");
            }
            println!("{}", serde_json::to_string_pretty(&structured)?);

            if let Some(ref path) = args.csv {
                if !write_csv(path, &structured, &args.business)? {
                    info!("No negative reviews, skipped {:?}", path);
                }
            }
            Ok(())
        }
        failed @ AnalysisOutcome::Failed { .. } => {
            println!("{}", serde_json::to_string_pretty(&failed)?);
            anyhow::bail!("Parsing failed");
        }
    }
}
