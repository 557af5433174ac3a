use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairSumError {
    #[error("invalid input: no two distinct elements sum to the target")]
    NoPairFound,
}

type Error = PairSumError;
type Result<T> = std::result::Result<T, Error>;

/// Maps each value to the last index it occurs at.
/// Earlier occurrences of a repeated value are overwritten.
struct LastSeen {
    index_by_value: HashMap<i32, usize>,
}

impl LastSeen {
    fn build(nums: &[i32]) -> Self {
        let mut index_by_value = HashMap::with_capacity(nums.len());

        for (i, &n) in nums.iter().enumerate() {
            index_by_value.insert(n, i);
        }

        Self { index_by_value }
    }

    /// Index of the complement of `value` (the element at `i`), if it
    /// exists at some position other than `i`.
    fn complement_of(&self, i: usize, value: i32, target: i32) -> Option<usize> {
        // An unrepresentable complement can't be in the input
        let complement = target.checked_sub(value)?;

        match self.index_by_value.get(&complement) {
            Some(&j) if j != i => Some(j),
            _ => None,
        }
    }
}

/// Finds two distinct indices `(i, j)` such that `nums[i] + nums[j] == target`.
///
/// `i` is the first index in scan order that has a match, `j` is the *last*
/// index holding its complement. The pair is not sorted.
///
/// ```
/// use two_sum::{find_pair_with_sum, PairSumError};
///
/// assert_eq!(find_pair_with_sum(&[2, 7, 11, 15], 9), Ok((0, 1)));
/// assert_eq!(find_pair_with_sum(&[1, 2], 100), Err(PairSumError::NoPairFound));
/// ```
pub fn find_pair_with_sum(nums: &[i32], target: i32) -> Result<(usize, usize)> {
    let last_seen = LastSeen::build(nums);

    for (i, &n) in nums.iter().enumerate() {
        if let Some(j) = last_seen.complement_of(i, n, target) {
            return Ok((i, j));
        }
    }

    Err(Error::NoPairFound)
}

/// Every scan index that has a match, paired with the last index of its
/// complement, in scan order.
///
/// ```
/// use two_sum::find_all_pairs;
///
/// assert_eq!(find_all_pairs(&[2, 7, 11, 15], 9), vec![(0, 1), (1, 0)]);
/// ```
pub fn find_all_pairs(nums: &[i32], target: i32) -> Vec<(usize, usize)> {
    let last_seen = LastSeen::build(nums);

    nums.iter()
        .enumerate()
        .filter_map(|(i, &n)| last_seen.complement_of(i, n, target).map(|j| (i, j)))
        .collect()
}
