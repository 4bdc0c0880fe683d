// 🔤 Order Check - is a string already sorted?
// Two forms: sort-and-compare (the kata) and a single pass over adjacent pairs

// ============================================================================
// SORT AND COMPARE
// ============================================================================

/// True when the characters of `text` are in non-decreasing order.
///
/// Copies the characters, sorts the copy, rejoins it and compares with the
/// original. Ordering is by Unicode scalar value, so `'Z' < 'a'` and no
/// locale rules apply. Empty text is in order.
pub fn is_in_order(text: &str) -> bool {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort();

    let sorted: String = chars.into_iter().collect();
    sorted == text
}

// ============================================================================
// PAIRWISE
// ============================================================================

/// Same answer as [`is_in_order`] without allocating
pub fn is_in_order_pairwise(text: &str) -> bool {
    text.chars()
        .zip(text.chars().skip(1))
        .all(|(a, b)| a <= b)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_in_order() {
        assert!(is_in_order(""));
        assert!(is_in_order_pairwise(""));
    }

    #[test]
    fn test_sorted_strings() {
        assert!(is_in_order("abc"));
        assert!(is_in_order("a"));
        assert!(is_in_order("aabbcc"));
    }

    #[test]
    fn test_unsorted_strings() {
        assert!(!is_in_order("cba"));
        assert!(!is_in_order("edabit"));
    }

    #[test]
    fn test_ordinal_not_locale() {
        // Uppercase sorts before lowercase by codepoint
        assert!(is_in_order("Za"));
        assert!(!is_in_order("aZ"));
    }

    #[test]
    fn test_pairwise_agrees_with_sort() {
        let samples = ["", "abc", "cba", "edabit", "xyz", "hello", "Za", "aZ", "ééa", "aé", "1234", "4321"];

        for s in samples {
            assert_eq!(is_in_order(s), is_in_order_pairwise(s), "disagree on {:?}", s);
        }
    }
}
