use crate::number::Number;

/// Sum of all answers. `T::ZERO` when there are none. Integer sums wrap on
/// overflow.
pub fn sum<T: Number>(answers: impl IntoIterator<Item = T>) -> T {
    answers.into_iter().fold(T::ZERO, Number::accumulate)
}

/// Smallest answer. The first answer seeds the accumulator; `T::ZERO` when
/// there are none.
pub fn min<T: Number>(answers: impl IntoIterator<Item = T>) -> T {
    extremum(answers, |answer, current| answer < current)
}

/// Largest answer. The first answer seeds the accumulator; `T::ZERO` when
/// there are none.
pub fn max<T: Number>(answers: impl IntoIterator<Item = T>) -> T {
    extremum(answers, |answer, current| answer > current)
}

fn extremum<T: Number>(answers: impl IntoIterator<Item = T>, replaces: impl Fn(T, T) -> bool) -> T {
    let mut best: Option<T> = None;
    for answer in answers {
        best = match best {
            Some(current) if !replaces(answer, current) => Some(current),
            _ => Some(answer),
        };
    }
    best.unwrap_or(T::ZERO)
}
