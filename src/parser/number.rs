//! Bounded Numeric Tokens
//!
//! Score strings are often typed without separators ("6463"), so a number
//! ends either at a non-digit or when one more digit would push it past a
//! ceiling.

/// Take the longest run of digits at `start` whose value stays within
/// `ceiling`.
///
/// The first digit is always taken, even when it alone exceeds the
/// ceiling; the caller decides whether that is worth a warning. A leading
/// zero is a complete number on its own. `None` disables the ceiling,
/// leaving only a `u32` overflow guard.
///
/// Returns `(value, digits consumed)`; `(0, 0)` if `start` is not a digit.
pub fn take_number(chars: &[char], start: usize, ceiling: Option<u32>) -> (u32, usize) {
    let mut value = 0u32;
    let mut len = 0usize;

    while let Some(digit) = chars.get(start + len).and_then(|c| c.to_digit(10)) {
        if len > 0 && value == 0 {
            break;
        }
        let Some(next) = value.checked_mul(10).and_then(|v| v.checked_add(digit)) else {
            break;
        };
        if len > 0 && ceiling.is_some_and(|limit| next > limit) {
            break;
        }
        value = next;
        len += 1;
    }

    (value, len)
}

/// Length of the digit run at `start`, ignoring any ceiling.
pub fn digit_run(chars: &[char], start: usize) -> usize {
    chars[start.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_two_digit_within_ceiling() {
        assert_eq!(take_number(&chars("10-8"), 0, Some(12)), (10, 2));
        assert_eq!(take_number(&chars("10-8"), 0, Some(8)), (1, 1));
    }

    #[test]
    fn test_concatenated_scores_split() {
        let input = chars("6463");
        assert_eq!(take_number(&input, 0, Some(8)), (6, 1));
        assert_eq!(take_number(&input, 1, Some(8)), (4, 1));
    }

    #[test]
    fn test_first_digit_always_taken() {
        assert_eq!(take_number(&chars("9"), 0, Some(6)), (9, 1));
    }

    #[test]
    fn test_leading_zero_stands_alone() {
        assert_eq!(take_number(&chars("06"), 0, Some(99)), (0, 1));
        assert_eq!(take_number(&chars("60"), 0, Some(99)), (60, 2));
    }

    #[test]
    fn test_unbounded_and_overflow_guard() {
        assert_eq!(take_number(&chars("12345"), 0, None), (12345, 5));
        let huge = chars("99999999999");
        let (value, len) = take_number(&huge, 0, None);
        assert_eq!(len, 9);
        assert_eq!(value, 999_999_999);
    }

    #[test]
    fn test_not_a_digit() {
        assert_eq!(take_number(&chars("-4"), 0, Some(8)), (0, 0));
        assert_eq!(digit_run(&chars("123-4"), 0), 3);
        assert_eq!(digit_run(&chars("12"), 5), 0);
    }
}
