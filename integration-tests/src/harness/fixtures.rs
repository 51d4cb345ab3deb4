use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn read_fixture(file: &str) -> String {
    fs::read_to_string(fixture_path(file))
        .unwrap_or_else(|e| panic!("failed to read fixture {file}: {e}"))
}
