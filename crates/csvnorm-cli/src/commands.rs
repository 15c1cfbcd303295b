use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use csvnorm_cli::diagnostics::WriterSink;
use csvnorm_cli::pipeline::run_pipeline;
use csvnorm_cli::types::RunResult;
use csvnorm_transform::{Normalizer, ZoneConfig};

use crate::cli::Cli;

const STDIN_LABEL: &str = "<stdin>";
const STDOUT_LABEL: &str = "<stdout>";

/// Normalize the input named on the command line into the chosen output.
pub fn run_normalize(cli: &Cli) -> Result<RunResult> {
    let zones = ZoneConfig::load_default().context("load time zones")?;
    let normalizer = Normalizer::new(zones);

    let (input, input_label) = open_input(cli.input_path())?;
    let (output, output_label) = open_output(cli.output.as_deref())?;
    let diagnostics: Box<dyn Write> = match &cli.diagnostics_file {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("create diagnostics file {}", path.display()))?,
        ),
        None => Box::new(io::stderr()),
    };
    let mut sink = WriterSink::new(diagnostics);

    let span = info_span!("normalize", input = %input_label, output = %output_label);
    let _guard = span.enter();
    info!("starting run");

    let start = Instant::now();
    let stats = run_pipeline(input, output, &mut sink, &normalizer)
        .with_context(|| format!("normalize {input_label}"))?;
    let elapsed = start.elapsed();

    info!(
        rows_written = stats.rows_written,
        rows_failed = stats.rows_failed,
        elapsed_ms = elapsed.as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: input_label,
        output: output_label,
        stats,
        elapsed,
    })
}

fn open_input(path: Option<&Path>) -> Result<(Box<dyn Read>, String)> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "opening input file");
            let file =
                File::open(path).with_context(|| format!("open input {}", path.display()))?;
            Ok((Box::new(file), path.display().to_string()))
        }
        None => Ok((Box::new(io::stdin().lock()), STDIN_LABEL.to_string())),
    }
}

fn open_output(path: Option<&Path>) -> Result<(Box<dyn Write>, String)> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "creating output file");
            let file =
                File::create(path).with_context(|| format!("create output {}", path.display()))?;
            Ok((Box::new(file), path.display().to_string()))
        }
        None => Ok((Box::new(io::stdout().lock()), STDOUT_LABEL.to_string())),
    }
}
