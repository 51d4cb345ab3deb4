use clap::Parser;
use clap::error::ErrorKind;
use miningsim_core::cli::{
    self, Cli, print_app_info, print_error, print_info, print_usage_example, report_message,
};
use miningsim_core::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    print_app_info();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // clap renders a multi-line message; the first line carries the cause.
            let rendered = err.to_string();
            let cause = rendered.lines().next().unwrap_or("invalid arguments");
            print_error(cause.trim_start_matches("error: "));
            print_usage_example();
            return ExitCode::from(2);
        }
    };

    match cli::run(&args) {
        Ok(()) => {
            print_info("OK - ALL DONE");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            print_error(&report_message(&err));
            ExitCode::FAILURE
        }
    }
}
