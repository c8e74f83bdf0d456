//! Launch the hq-tui standalone binary.

use hq_core::ContentSource;

/// Launch the hq-tui standalone binary.
pub fn run(source: &ContentSource, seed: Option<u64>) -> Result<(), String> {
    let mut command = std::process::Command::new("hq-tui");
    command.arg("--content").arg(source.to_string());
    if let Some(seed) = seed {
        command.arg("--seed").arg(seed.to_string());
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("hq-tui exited with {s}")),
        Err(_) => {
            Err("hq-tui binary not found. Install with: cargo install --path crates/hq-tui".into())
        }
    }
}
