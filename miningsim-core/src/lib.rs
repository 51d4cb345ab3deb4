pub mod cli;
pub mod document;
pub mod logging;
pub mod simlog;
