mod args;
mod run;
mod status;
#[cfg(test)]
mod tests;

pub use args::*;
pub use run::*;
pub use status::*;
