//! Free-function combinators over `Option`.

/// Combines two optional values with a function.
///
/// The combiner is applied only if **both** operands are present; if either
/// is absent the result is `None` and the combiner is never invoked, not
/// even partially.
///
/// # Examples
///
/// ```
/// use funcore::option::zip2;
///
/// assert_eq!(zip2(Some(2), Some(3), |a, b| a + b), Some(5));
/// assert_eq!(zip2(None::<i32>, Some(3), |a, b| a + b), None);
/// assert_eq!(zip2(Some(2), None::<i32>, |a, b| a + b), None);
/// ```
#[inline]
pub fn zip2<A, B, R, F>(first: Option<A>, second: Option<B>, combiner: F) -> Option<R>
where
    F: FnOnce(A, B) -> R,
{
    match (first, second) {
        (Some(first), Some(second)) => Some(combiner(first, second)),
        _ => None,
    }
}

/// Combines three optional values with a function.
///
/// As with [`zip2`], the combiner runs only when every operand is present.
///
/// # Examples
///
/// ```
/// use funcore::option::zip3;
///
/// assert_eq!(zip3(Some(1), Some(2), Some(3), |a, b, c| a + b + c), Some(6));
/// assert_eq!(zip3(Some(1), None::<i32>, Some(3), |a, b, c| a + b + c), None);
/// ```
#[inline]
pub fn zip3<A, B, C, R, F>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    combiner: F,
) -> Option<R>
where
    F: FnOnce(A, B, C) -> R,
{
    match (first, second, third) {
        (Some(first), Some(second), Some(third)) => Some(combiner(first, second, third)),
        _ => None,
    }
}

/// Converts a sequence of optional values into an optional sequence.
///
/// Returns a `Vec` of every value, in original order, **if and only if**
/// none of the inputs are absent; a single `None` makes the whole result
/// `None`. An empty input vacuously satisfies "all present" and yields
/// `Some(vec![])`.
///
/// Useful for "I need all of these lookups to succeed, or the whole
/// operation fails".
///
/// # Examples
///
/// ```
/// use funcore::option::sequence;
///
/// assert_eq!(sequence(vec![Some("a"), Some("b")]), Some(vec!["a", "b"]));
/// assert_eq!(sequence(vec![Some("a"), None, Some("c")]), None);
/// assert_eq!(sequence(Vec::<Option<i32>>::new()), Some(vec![]));
/// ```
pub fn sequence<T, I>(values: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().collect()
}

/// Collapses an optional value into a single result.
///
/// Evaluates `if_absent` when the value is `None`, otherwise `if_present`
/// with the contained value. Exactly one branch executes.
///
/// # Examples
///
/// ```
/// use funcore::option::fold;
///
/// let absent = fold(None::<i32>, || "empty".to_string(), |v| format!("value:{v}"));
/// assert_eq!(absent, "empty");
///
/// let present = fold(Some(42), || "empty".to_string(), |v| format!("value:{v}"));
/// assert_eq!(present, "value:42");
/// ```
#[inline]
pub fn fold<T, R, FA, FP>(value: Option<T>, if_absent: FA, if_present: FP) -> R
where
    FA: FnOnce() -> R,
    FP: FnOnce(T) -> R,
{
    match value {
        Some(value) => if_present(value),
        None => if_absent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip2_combiner_not_invoked_when_absent() {
        let result = zip2(None::<i32>, Some(3), |_, _| -> i32 {
            panic!("combiner must not run")
        });
        assert_eq!(result, None);
    }

    #[test]
    fn test_zip3_mixed_types() {
        let result = zip3(Some(1), Some("x"), Some(2.0), |a, b, c| {
            format!("{a}{b}{c}")
        });
        assert_eq!(result, Some("1x2".to_string()));
    }

    #[test]
    fn test_sequence_preserves_order() {
        let values = vec![Some(3), Some(1), Some(2)];
        assert_eq!(sequence(values), Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_fold_exactly_one_branch() {
        let result = fold(Some(1), || panic!("absent branch must not run"), |v| v + 1);
        assert_eq!(result, 2);
    }
}
