//! Scalar reductions built on [`Reducer`]
//!
//! Only `maximum` and `all` run their own shard/global pair. `minimum` is
//! `maximum` under the reversed comparator, and `any` is the negation of
//! `all` under the negated predicate, so `any` over an empty input is `false`.

use crate::error::{Error, Result};
use crate::reduce::Reducer;
use std::cmp::Ordering;
use std::convert::Infallible;

/// Largest item by `cmp`; the earliest one wins ties
fn first_max<'a, T, I, F>(items: I, cmp: &F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T, &T) -> Ordering,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(best) if cmp(item, best) != Ordering::Greater => Some(best),
        _ => Some(item),
    })
}

impl Reducer {
    /// Maximum element of `values` by `cmp`
    ///
    /// Among equal maxima the one that appears first in `values` is returned.
    /// Fails with [`Error::EmptyInput`] when `values` is empty.
    pub fn maximum<'a, T, F>(&self, values: &'a [T], workers: usize, cmp: F) -> Result<&'a T>
    where
        T: Sync,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        let cmp = &cmp;
        self.try_reduce(
            values,
            workers,
            |shard| Ok::<_, Infallible>(first_max(shard, cmp)),
            |maxima| first_max(maxima.into_iter().flatten(), cmp).ok_or(Error::EmptyInput),
        )
    }

    /// Minimum element of `values` by `cmp`
    ///
    /// Computed as [`Reducer::maximum`] with the comparator reversed.
    pub fn minimum<'a, T, F>(&self, values: &'a [T], workers: usize, cmp: F) -> Result<&'a T>
    where
        T: Sync,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        self.maximum(values, workers, move |a, b| cmp(b, a))
    }

    /// Whether every element satisfies `pred`; `true` for an empty input
    pub fn all<T, P>(&self, values: &[T], workers: usize, pred: P) -> Result<bool>
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        let pred = &pred;
        self.reduce(
            values,
            workers,
            |shard| shard.iter().all(pred),
            |shards| shards.into_iter().all(|ok| ok),
        )
    }

    /// Whether some element satisfies `pred`; `false` for an empty input
    ///
    /// Computed as `!all(values, !pred)`.
    pub fn any<T, P>(&self, values: &[T], workers: usize, pred: P) -> Result<bool>
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        self.all(values, workers, move |item| !pred(item)).map(|all| !all)
    }
}

/// Maximum element by `cmp` with the default configuration
pub fn maximum<'a, T, F>(values: &'a [T], workers: usize, cmp: F) -> Result<&'a T>
where
    T: Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    Reducer::default().maximum(values, workers, cmp)
}

/// Minimum element by `cmp` with the default configuration
pub fn minimum<'a, T, F>(values: &'a [T], workers: usize, cmp: F) -> Result<&'a T>
where
    T: Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    Reducer::default().minimum(values, workers, cmp)
}

/// Whether every element satisfies `pred`, with the default configuration
pub fn all<T, P>(values: &[T], workers: usize, pred: P) -> Result<bool>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    Reducer::default().all(values, workers, pred)
}

/// Whether some element satisfies `pred`, with the default configuration
pub fn any<T, P>(values: &[T], workers: usize, pred: P) -> Result<bool>
where
    T: Sync,
    P: Fn(&T) -> bool + Sync,
{
    Reducer::default().any(values, workers, pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::{all, any};
    use proptest::prelude::*;

    #[test]
    fn test_maximum() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];

        assert_eq!(maximum(&values, 3, i32::cmp), Ok(&9));
        assert_eq!(minimum(&values, 3, i32::cmp), Ok(&1));
    }

    #[test]
    fn test_maximum_empty_input() {
        let values: [i32; 0] = [];

        assert_eq!(maximum(&values, 1, i32::cmp), Err(Error::EmptyInput));
        assert_eq!(minimum(&values, 8, i32::cmp), Err(Error::EmptyInput));
    }

    #[test]
    fn test_maximum_zero_workers() {
        assert!(matches!(
            maximum(&[1, 2], 0, i32::cmp),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        // (key, position)
        let values = [(1, 0), (7, 1), (3, 2), (7, 3), (1, 4), (7, 5)];
        let by_key = |a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0);

        for workers in 1..=values.len() {
            assert_eq!(maximum(&values, workers, by_key), Ok(&(7, 1)));
            assert_eq!(minimum(&values, workers, by_key), Ok(&(1, 0)));
        }
    }

    #[test]
    fn test_maximum_returns_borrowed_element() {
        let words = vec!["pear".to_string(), "fig".to_string(), "banana".to_string()];

        let longest = maximum(&words, 2, |a, b| a.len().cmp(&b.len())).unwrap();

        assert!(std::ptr::eq(longest, &words[2]));
    }

    #[test]
    fn test_all_and_any() {
        let even = |x: &i32| x % 2 == 0;

        assert_eq!(all(&[2, 4, 6, 8], 4, even), Ok(true));
        assert_eq!(all(&[2, 4, 5, 8], 4, even), Ok(false));
        assert_eq!(any(&[1, 3, 5, 7], 2, even), Ok(false));
        assert_eq!(any(&[1, 3, 6, 7], 2, even), Ok(true));
    }

    #[test]
    fn test_empty_all_any() {
        let values: [i32; 0] = [];

        assert_eq!(all(&values, 3, |_| false), Ok(true));
        assert_eq!(any(&values, 3, |_| true), Ok(false));
    }

    #[test]
    fn test_all_any_zero_workers() {
        assert!(matches!(all(&[1], 0, |_| true), Err(Error::InvalidArgument(_))));
        assert!(matches!(any(&[1], 0, |_| true), Err(Error::InvalidArgument(_))));
    }

    proptest! {
        #[test]
        fn prop_maximum_matches_sequential(values in prop::collection::vec(-1_000i64..1_000, 1..200), workers in 1usize..16) {
            let expected = values.iter().max().unwrap();
            prop_assert_eq!(maximum(&values, workers, i64::cmp).unwrap(), expected);
        }

        #[test]
        fn prop_minimum_is_reversed_maximum(values in prop::collection::vec(prop::num::i32::ANY, 1..200), workers in 1usize..16) {
            let min = minimum(&values, workers, i32::cmp).unwrap();
            let reversed_max = maximum(&values, workers, |a: &i32, b: &i32| b.cmp(a)).unwrap();
            prop_assert!(std::ptr::eq(min, reversed_max));
        }

        #[test]
        fn prop_any_is_not_all_not(values in prop::collection::vec(0u8..10, 0..200), workers in 1usize..16, threshold in 0u8..11) {
            let pred = |x: &u8| *x >= threshold;
            let any_result = any(&values, workers, pred).unwrap();
            let not_all_not = !all(&values, workers, |x| !pred(x)).unwrap();
            prop_assert_eq!(any_result, not_all_not);
            prop_assert_eq!(any_result, values.iter().any(pred));
            prop_assert_eq!(all(&values, workers, pred).unwrap(), values.iter().all(pred));
        }
    }
}
