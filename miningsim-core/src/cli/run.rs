use crate::cli::args::Cli;
use crate::cli::status::print_info;
use crate::document::{OutputFormat, render_statistics, write_document};
use crate::simlog::{LogError, derive_statistics, reconstruct_file};
use anyhow::Result;

/// Runs the whole pipeline: log file -> state -> statistics -> document file.
///
/// Prints a status line after every stage. Errors are returned untouched so
/// [`report_message`] can tell them apart.
pub fn run(args: &Cli) -> Result<()> {
    print_info("Extracted application input arguments");

    let state = reconstruct_file(&args.input)?;
    print_info(&format!(
        "Parsed input simulation log file '{}'",
        args.input.display()
    ));
    print_info("Reconstructed simulation data from logged events");

    let stats = derive_statistics(&state)?;
    print_info("Created simulation statistics");

    let format = OutputFormat::from_path(&args.output);
    let document = render_statistics(&stats, format)?;
    print_info(&format!("Statistics written to {format} Document"));

    write_document(&args.output, &document)?;
    print_info(&format!(
        "{format} Document written to output file '{}'",
        args.output.display()
    ));

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        %format,
        "run complete"
    );
    Ok(())
}

/// User-facing text for a failed run.
///
/// An unreadable input file is reported as is. Everything else, malformed
/// logs included, is reported as an unexpected failure.
pub fn report_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LogError>() {
        Some(LogError::Open { .. }) => err.to_string(),
        _ => format!("Unexpected error occurred during program execution: {err}"),
    }
}
