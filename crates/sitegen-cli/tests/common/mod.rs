#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const SAMPLE_LIST: &str = "\
0.9
https://example.com/
https://example.com/pricing

0.5
https://example.com/blog
";

/// Create a configured `sitegen` command running inside `dir`.
#[allow(dead_code)]
pub fn sitegen_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitegen"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.current_dir(dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("failed to write fixture");
}

#[allow(dead_code)]
pub fn read_file(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("failed to read output")
}

/// File names in `dir`, sorted.
#[allow(dead_code)]
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
