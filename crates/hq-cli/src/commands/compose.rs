use colored::Colorize;

use hq_core::ContentSource;

pub fn run(
    source: &ContentSource,
    seed: Option<u64>,
    answers: &[usize],
    plain: bool,
) -> Result<(), String> {
    let mut session = super::start_session(source, seed)?;
    let total = session.content().question_count();

    if answers.len() != total {
        return Err(format!(
            "expected {total} answers, one per question, got {}",
            answers.len()
        ));
    }

    for (i, &number) in answers.iter().enumerate() {
        if number == 0 || !session.choose_option(number - 1) {
            let options = session
                .current_question()
                .map(|q| q.options.len())
                .unwrap_or(0);
            return Err(format!(
                "question {} has no option {number} (choose 1-{options})",
                i + 1
            ));
        }
    }

    if plain {
        println!("{}", session.horoscope());
        return Ok(());
    }

    println!(
        "  {} {}  {} {}",
        "Zodiac:".dimmed(),
        super::sign_name(session.zodiac()).bold(),
        "Ascendant:".dimmed(),
        super::sign_name(session.ascendant()).bold(),
    );
    println!();
    println!("{}", session.horoscope());
    Ok(())
}
