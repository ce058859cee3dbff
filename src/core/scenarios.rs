use crate::domain::model::{is_palindrome, PalindromeMatch};
use crate::domain::ports::PalindromeFinder;
use crate::utils::error::{PalindromeError, Result};

/// Known inputs and their expected longest palindromic substring.
pub const SCENARIOS: &[(&str, &str)] = &[
    ("artrartrt", "rtrartr"),
    ("abacada", "aba"),
    ("aaaa", "aaaa"),
    ("", ""),
    ("ab", "a"),
];

/// Runs every entry of [`SCENARIOS`] through `finder`, stopping at the first mismatch.
pub fn run_scenarios<F: PalindromeFinder + ?Sized>(finder: &F) -> Result<usize> {
    for (input, expected) in SCENARIOS {
        let found = finder.find(input);
        if found.text != *expected {
            return Err(PalindromeError::ScenarioFailed {
                strategy: finder.name().to_string(),
                input: input.to_string(),
                expected: expected.to_string(),
                actual: found.text,
            });
        }
        verify_match(input, &found)?;
        tracing::debug!(strategy = finder.name(), input, "scenario passed");
    }
    Ok(SCENARIOS.len())
}

/// Checks `found` against `text` exhaustively: it must sit at its reported
/// start, read the same reversed, and no palindrome may be longer, nor as
/// long while starting earlier.
pub fn verify_match(text: &str, found: &PalindromeMatch) -> Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let violation = |reason: String| PalindromeError::InvariantViolation {
        input: text.to_string(),
        reason,
    };

    let end = match found.start.checked_add(found.len) {
        Some(end) if end <= chars.len() => end,
        _ => {
            return Err(violation(format!(
                "span of {} char(s) at {} is out of bounds",
                found.len, found.start
            )))
        }
    };

    let window = &chars[found.start..end];
    if window.iter().collect::<String>() != found.text {
        return Err(violation("text does not occur at the reported start".to_string()));
    }
    if !is_palindrome(window) {
        return Err(violation(format!("{:?} is not a palindrome", found.text)));
    }

    for start in 0..chars.len() {
        for end in start + 1..=chars.len() {
            let len = end - start;
            if !is_palindrome(&chars[start..end]) {
                continue;
            }
            if len > found.len {
                return Err(violation(format!(
                    "longer palindrome exists at {}..{}",
                    start, end
                )));
            }
            if start < found.start && len == found.len {
                return Err(violation(format!(
                    "equal-length palindrome starts earlier at {}",
                    start
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manacher::Manacher;

    #[test]
    fn test_run_scenarios() {
        assert_eq!(run_scenarios(&Manacher).unwrap(), SCENARIOS.len());
    }

    #[test]
    fn test_verify_match_rejects_later_tie() {
        let later = PalindromeMatch {
            start: 2,
            len: 3,
            text: "aca".to_string(),
        };
        assert!(matches!(
            verify_match("abacada", &later),
            Err(PalindromeError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_verify_match_rejects_misplaced_text() {
        let misplaced = PalindromeMatch {
            start: 1,
            len: 3,
            text: "aba".to_string(),
        };
        assert!(verify_match("abacada", &misplaced).is_err());
    }

    #[test]
    fn test_verify_match_rejects_out_of_range_span() {
        let overflowing = PalindromeMatch {
            start: usize::MAX,
            len: 2,
            text: "aa".to_string(),
        };
        assert!(matches!(
            verify_match("aa", &overflowing),
            Err(PalindromeError::InvariantViolation { .. })
        ));

        let past_end = PalindromeMatch {
            start: 1,
            len: 2,
            text: "aa".to_string(),
        };
        assert!(verify_match("aa", &past_end).is_err());
    }

    #[test]
    fn test_verify_match_accepts_empty() {
        let empty = PalindromeMatch {
            start: 0,
            len: 0,
            text: String::new(),
        };
        assert!(verify_match("", &empty).is_ok());
    }
}
