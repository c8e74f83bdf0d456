//! Deterministic start/end block selection from the answer sequence.
//!
//! The answers are concatenated without separator and hashed with the
//! polynomial rolling hash `h = h * 31 + c` over UTF-16 code units, using
//! wrapping 32-bit signed arithmetic. The absolute value of the result picks
//! the start block (`hash % len`) and, shifted right by four bits, the end
//! block. Same answers, same blocks.

/// Hash the ordered answer fragments.
pub fn answer_hash<S: AsRef<str>>(answers: &[S]) -> u32 {
    let mut hash: i32 = 0;
    for unit in answers.iter().flat_map(|a| a.as_ref().encode_utf16()) {
        // (hash << 5) - hash == hash * 31
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Indices of the start and end blocks chosen for an answer hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentSelection {
    /// The answer hash the indices were derived from.
    pub hash: u32,
    /// Index into the start blocks.
    pub start_index: usize,
    /// Index into the end blocks.
    pub end_index: usize,
}

impl FragmentSelection {
    /// Select blocks for `hash`. `None` when either pool is empty.
    pub fn new(hash: u32, start_len: usize, end_len: usize) -> Option<Self> {
        if start_len == 0 || end_len == 0 {
            return None;
        }
        Some(Self {
            hash,
            start_index: hash as usize % start_len,
            end_index: (hash >> 4) as usize % end_len,
        })
    }

    /// Hash `answers` and select blocks in one step.
    pub fn for_answers<S: AsRef<str>>(
        answers: &[S],
        start_len: usize,
        end_len: usize,
    ) -> Option<Self> {
        Self::new(answer_hash(answers), start_len, end_len)
    }
}
