use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

pub const APP_NAME: &str = "miningsim";
pub const DIVIDER: &str = "--------------------------------------------------";
pub const USAGE_EXAMPLE: &str = "[EXAMPLE]: $ miningsim -i <in_file_name> -o <out_file_name>";

pub fn print_app_info() {
    println!(
        "{APP_NAME} - Mining Simulation Statistics (v{})",
        env!("CARGO_PKG_VERSION")
    );
    println!("{DIVIDER}");
}

pub fn info_line(message: &str) -> String {
    format!("{APP_NAME}[INFO]: {message}")
}

pub fn error_line(message: &str) -> String {
    format!("{APP_NAME}[ERROR]: {message}")
}

pub fn print_info(message: &str) {
    if io::stdout().is_terminal() {
        println!("{}", info_line(message).green());
    } else {
        println!("{}", info_line(message));
    }
}

pub fn print_error(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_line(message).red());
    } else {
        eprintln!("{}", error_line(message));
    }
}

pub fn print_usage_example() {
    println!("{USAGE_EXAMPLE}");
}
