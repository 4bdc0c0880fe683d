// 🔢 Bounded Numeric Pipelines - ranges, reductions and find-first
// Everything here works on a finite list or range of integers

use std::cell::RefCell;
use std::ops::Range;

// ============================================================================
// RANGE
// ============================================================================

/// Lazy ascending sequence over `[start, end)`
pub fn range(start: i64, end: i64) -> Range<i64> {
    start..end
}

/// Elements back to back, the way `1..10` prints as `123456789`
pub fn render_concat<I>(numbers: I) -> String
where
    I: IntoIterator<Item = i64>,
{
    numbers.into_iter().map(|n| n.to_string()).collect()
}

// ============================================================================
// REDUCTIONS
// ============================================================================

pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |total, e| total + e)
}

pub fn concat_digits(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|e| e.to_string())
        .fold(String::new(), |carry, s| carry + &s)
}

/// Given the values, double the even numbers and total
pub fn double_evens_and_sum(numbers: &[i64]) -> i64 {
    numbers.iter().filter(|e| *e % 2 == 0).map(|e| e * 2).sum()
}

// ============================================================================
// FIND FIRST
// ============================================================================

/// Double of the first even number greater than `floor`
pub fn first_doubled_even_above(numbers: &[i64], floor: i64) -> Option<i64> {
    numbers
        .iter()
        .filter(|e| **e > floor)
        .filter(|e| *e % 2 == 0)
        .map(|e| e * 2)
        .next()
}

/// Loop form of [`first_doubled_even_above`]
pub fn first_doubled_even_above_imperative(numbers: &[i64], floor: i64) -> Option<i64> {
    for &e in numbers {
        if e > floor && e % 2 == 0 {
            return Some(e * 2);
        }
    }
    None
}

/// Anti-pattern: stages with side effects.
///
/// Each predicate and the mapping push an entry onto the returned trace.
/// Lazy pipelines should not do this; it exists to show that evaluation
/// stops at the first hit instead of running every stage over every element.
pub fn first_doubled_even_above_traced(numbers: &[i64], floor: i64) -> (Option<i64>, Vec<String>) {
    let trace = RefCell::new(Vec::new());

    let result = numbers
        .iter()
        .filter(|e| {
            trace.borrow_mut().push(format!("isGreater {}", e));
            **e > floor
        })
        .filter(|e| {
            trace.borrow_mut().push(format!("isEven {}", e));
            *e % 2 == 0
        })
        .map(|e| {
            trace.borrow_mut().push(format!("doubleIt {}", e));
            e * 2
        })
        .next();

    (result, trace.into_inner())
}

// ============================================================================
// TESTS
// ============================================================================
