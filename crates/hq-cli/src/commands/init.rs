use std::path::Path;

use colored::Colorize;

use hq_core::ContentSource;

/// Write the content document from `from` to a new file at `path`.
pub fn run(path: &Path, from: &ContentSource) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }
    let doc = super::fetch(from)?;
    let json = doc
        .to_json_pretty()
        .map_err(|e| format!("cannot serialize content: {e}"))?;
    std::fs::write(path, json + "\n")
        .map_err(|e| format!("cannot write '{}': {e}", path.display()))?;

    println!(
        "  {} content '{}' ({} questions, from {from})",
        "Created".green().bold(),
        path.display(),
        doc.questions.len()
    );
    println!("  Edit it, then run: hq play --content {}", path.display());
    Ok(())
}
