use std::io::{self, BufRead, Write};

use colored::Colorize;

use hq_core::{ContentSource, QuizSession};

pub fn run(source: &ContentSource, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::start_session(source, seed)?;

    println!("  {} Horoscope Quiz", "Starting".bold());
    println!("  Type an option number to answer, 'restart' to start over, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    show(&session);
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "q" => break,
            "restart" | "r" => {
                session.restart();
                println!();
                show(&session);
            }
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 && session.choose_option(n - 1) => {
                    println!();
                    show(&session);
                }
                _ if session.is_finished() => {
                    println!("{}\n", "The quiz is over. Type 'restart' or 'quit'.".yellow());
                }
                _ => {
                    let count = session
                        .current_question()
                        .map(|q| q.options.len())
                        .unwrap_or(0);
                    println!("{}\n", format!("Pick a number from 1 to {count}.").yellow());
                }
            },
        }
    }

    Ok(())
}

/// Print the current question, or the horoscope once the quiz is over.
fn show(session: &QuizSession) {
    if let Some(question) = session.current_question() {
        if let Some((position, total)) = session.progress() {
            let marker = if session.is_last_question() {
                " (last one)"
            } else {
                ""
            };
            println!(
                "  {}",
                format!("Question {position} of {total}{marker}").dimmed()
            );
        }
        println!("  {}", question.text.bold());
        for (i, option) in question.options.iter().enumerate() {
            println!("    {}. {}", i + 1, option.label);
        }
        return;
    }

    println!(
        "  {} {}  {} {}\n",
        "Zodiac:".dimmed(),
        super::sign_name(session.zodiac()).bold(),
        "Ascendant:".dimmed(),
        super::sign_name(session.ascendant()).bold(),
    );
    println!("{}\n", session.horoscope());
}
