//! Arithmetic and string utilities
//!
//! Pure, synchronous functions. Inputs outside a function's domain return
//! [`SkillsError::InvalidInput`].

use crate::error::{Result, SkillsError};
use std::collections::HashSet;

/// Return a greeting message for the given name
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Sum of all numbers; zero for an empty slice
///
/// A total that does not fit in `i64` is invalid.
pub fn calculate_sum(numbers: &[i64]) -> Result<i64> {
    numbers.iter().try_fold(0i64, |acc, &n| {
        acc.checked_add(n).ok_or_else(|| SkillsError::invalid_input("sum overflows i64"))
    })
}

/// Largest value in a non-empty slice
pub fn find_max(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .copied()
        .max()
        .ok_or_else(|| SkillsError::invalid_input("slice cannot be empty"))
}

/// Reverse the order of the characters in `text`
///
/// Works on `char`s, so combining marks are not kept with their base letter.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Whether `text` reads the same backwards, ignoring case and whitespace
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// First `n` Fibonacci numbers, starting 0, 1, 1, 2, ...
///
/// Non-positive `n` gives an empty sequence. Terms past `u64::MAX` saturate.
pub fn fibonacci(n: i64) -> Vec<u64> {
    let n = match usize::try_from(n) {
        Ok(0) | Err(_) => return Vec::new(),
        Ok(n) => n,
    };

    let mut sequence: Vec<u64> = Vec::with_capacity(n);
    sequence.push(0);
    if n > 1 {
        sequence.push(1);
    }
    for i in 2..n {
        sequence.push(sequence[i - 1].saturating_add(sequence[i - 2]));
    }
    sequence
}

/// `n!`
///
/// Negative input, or a result that does not fit in `u128`, is invalid.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(SkillsError::invalid_input(
            "factorial not defined for negative numbers",
        ));
    }

    (2..=n as u128).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or_else(|| SkillsError::invalid_input(format!("factorial of {} overflows u128", n)))
    })
}

/// Only the even numbers, in order
pub fn filter_even(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Character count of each string
pub fn string_lengths<S: AsRef<str>>(strings: &[S]) -> Vec<usize> {
    strings.iter().map(|s| s.as_ref().chars().count()).collect()
}

/// Whether every number is strictly positive (true for an empty slice)
pub fn all_positive(numbers: &[i64]) -> bool {
    numbers.iter().all(|&n| n > 0)
}

/// Whether `value` occurs in `numbers`
pub fn contains(numbers: &[i64], value: i64) -> bool {
    numbers.contains(&value)
}

/// Distinct values in order of first occurrence
pub fn unique_values(numbers: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(numbers.len());
    numbers.iter().copied().filter(|n| seen.insert(*n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn test_calculate_sum() {
        assert_eq!(calculate_sum(&[1, 2, 3, 4, 5]).unwrap(), 15);
        assert_eq!(calculate_sum(&[]).unwrap(), 0);
        assert_eq!(calculate_sum(&[-3, 3]).unwrap(), 0);
    }

    #[test]
    fn test_calculate_sum_overflow() {
        assert!(matches!(calculate_sum(&[i64::MAX, 1]), Err(SkillsError::InvalidInput(_))));
        assert!(calculate_sum(&[i64::MIN, -1]).is_err());
        assert_eq!(calculate_sum(&[i64::MAX, -1, 1]).unwrap(), i64::MAX);
    }

    #[test]
    fn test_fibonacci_saturates() {
        let seq = fibonacci(100);
        assert_eq!(seq.len(), 100);
        assert_eq!(seq[99], u64::MAX);
    }

    #[test]
    fn test_find_max() {
        assert_eq!(find_max(&[1, 5, 3, 9, 2]).unwrap(), 9);
        assert_eq!(find_max(&[-7, -2, -9]).unwrap(), -2);
    }

    #[test]
    fn test_find_max_empty() {
        assert!(matches!(find_max(&[]), Err(SkillsError::InvalidInput(_))));
    }

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("Hello"), "olleH");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("añb"), "bña");
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("Race Car"));
        assert!(is_palindrome("A man a plan a canal Panama"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_fibonacci_small() {
        assert!(fibonacci(0).is_empty());
        assert!(fibonacci(-4).is_empty());
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(2), vec![0, 1]);
    }

    #[test]
    fn test_fibonacci_ten() {
        let seq = fibonacci(10);
        assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        for i in 2..seq.len() {
            assert_eq!(seq[i], seq[i - 1] + seq[i - 2]);
        }
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_invalid() {
        assert!(matches!(factorial(-1), Err(SkillsError::InvalidInput(_))));
        assert!(matches!(factorial(40), Err(SkillsError::InvalidInput(_))));
    }

    #[test]
    fn test_sequence_helpers() {
        assert_eq!(filter_even(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
        assert_eq!(filter_even(&[-2, -1, 0]), vec![-2, 0]);
        assert_eq!(string_lengths(&["a", "ab", "abc"]), vec![1, 2, 3]);
        assert!(all_positive(&[1, 2, 3]));
        assert!(!all_positive(&[1, 0, 3]));
        assert!(all_positive(&[]));
    }

    #[test]
    fn test_contains_and_unique() {
        assert!(contains(&[1, 2, 3, 4], 3));
        assert!(!contains(&[1, 2, 3, 4], 7));
        assert_eq!(unique_values(&[1, 2, 2, 3, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(unique_values(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    proptest! {
        #[test]
        fn prop_find_max_matches_iter_max(numbers in prop::collection::vec(any::<i64>(), 1..64)) {
            let expected = *numbers.iter().max().unwrap();
            prop_assert_eq!(find_max(&numbers).unwrap(), expected);
        }

        #[test]
        fn prop_reverse_is_involution(text in ".*") {
            prop_assert_eq!(reverse_string(&reverse_string(&text)), text);
        }

        #[test]
        fn prop_fibonacci_length(n in -10i64..90) {
            prop_assert_eq!(fibonacci(n).len(), n.max(0) as usize);
        }
    }
}
