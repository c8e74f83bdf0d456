use hq_core::{FragmentSelection, answer_hash};

pub fn run(fragments: &[String], start: Option<usize>, end: Option<usize>) -> Result<(), String> {
    let hash = answer_hash(fragments);
    println!("hash: {hash}");

    if let (Some(start_len), Some(end_len)) = (start, end) {
        let selection = FragmentSelection::new(hash, start_len, end_len)
            .ok_or("--start and --end must both be at least 1")?;
        println!("start index: {}", selection.start_index);
        println!("end index: {}", selection.end_index);
    } else if start.is_some() || end.is_some() {
        return Err("--start and --end must be given together".into());
    }
    Ok(())
}
