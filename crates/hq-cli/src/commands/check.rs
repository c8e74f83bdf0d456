use colored::Colorize;
use comfy_table::{Cell, Table};

use hq_core::{ContentSource, ContentStore};

pub fn run(source: &ContentSource) -> Result<(), String> {
    let doc = super::fetch(source)?;
    let store = ContentStore::from(doc);
    let summary = store.summary();

    println!("  {} {source}", "Content".bold());

    let mut table = Table::new();
    table.set_header(vec!["Pool", "Entries"]);
    for (name, count) in [
        ("questions", summary.questions),
        ("options", summary.options),
        ("zodiacs", summary.zodiacs),
        ("ascendants", summary.ascendants),
        ("startBlocks", summary.start_blocks),
        ("endBlocks", summary.end_blocks),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");

    let mut warnings = Vec::new();
    if summary.questions == 0 {
        warnings.push("no questions: the quiz cannot progress".to_string());
    }
    for q in store.questions().iter().filter(|q| q.options.is_empty()) {
        warnings.push(format!("question {} has no options", q.id));
    }
    if summary.zodiacs == 0 {
        warnings.push("no zodiacs: zodiac fragment will be empty".to_string());
    }
    if summary.ascendants == 0 {
        warnings.push("no ascendants: ascendant fragment will be empty".to_string());
    }
    if summary.uses_fallback() {
        warnings.push(
            "start or end blocks missing: horoscope will be the plain answers".to_string(),
        );
    }

    if warnings.is_empty() {
        println!("  {}", "ok".green().bold());
    } else {
        for w in &warnings {
            println!("  {} {w}", "warning:".yellow().bold());
        }
    }
    Ok(())
}
