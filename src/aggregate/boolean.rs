use crate::answer::BoolAnswer;

/// Logical OR over applicable answers.
///
/// Returns `true` at the first applicable `true`; abstentions are skipped.
/// `false` when nobody answers applicably.
pub fn any(answers: impl IntoIterator<Item = BoolAnswer>) -> bool {
    answers
        .into_iter()
        .any(|answer| answer.is_applicable && answer.result)
}

/// Logical AND over applicable answers.
///
/// Returns `false` at the first applicable `false`. If every applicable answer
/// is `true` the result is whether there was at least one, so a query where
/// everyone abstains is `false`, not vacuously `true`.
pub fn all(answers: impl IntoIterator<Item = BoolAnswer>) -> bool {
    let mut has_answer = false;
    for answer in answers {
        if !answer.is_applicable {
            continue;
        }
        if !answer.result {
            return false;
        }
        has_answer = true;
    }
    has_answer
}
