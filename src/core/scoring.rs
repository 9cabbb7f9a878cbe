//! Answer normalization and scoring

/// Normalize an answer for storage or comparison: trim, then lower-case
#[must_use]
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Count positions where the given answer matches the stored one
///
/// `expected` holds already-normalized answers. Given answers are normalized
/// before comparing; a missing given answer counts as the empty string, and
/// extras beyond `expected.len()` are ignored.
#[must_use]
pub fn score_attempt<S: AsRef<str>>(expected: &[String], given: &[S]) -> u32 {
    let matched = expected
        .iter()
        .enumerate()
        .filter(|(i, correct)| {
            let answer = given.get(*i).map_or("", |a| a.as_ref());
            normalize_answer(answer) == **correct
        })
        .count();
    u32::try_from(matched).unwrap_or(u32::MAX)
}
