use crate::domain::model::{is_palindrome, Span};
use crate::domain::ports::PalindromeFinder;

/// Checks every `text[start..end]` in (start, end) order and keeps the
/// first strictly longer palindrome. O(n^3); the reference the other
/// finders are tested against.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl PalindromeFinder for BruteForce {
    fn name(&self) -> &'static str {
        "brute-force"
    }

    fn longest_span(&self, chars: &[char]) -> Span {
        let mut best = Span::default();

        for start in 0..chars.len() {
            for end in start + 1..=chars.len() {
                if is_palindrome(&chars[start..end]) {
                    best.keep_longer(Span::new(start, end - start));
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_scenarios() {
        assert_eq!(BruteForce.find("artrartrt").text, "rtrartr");
        assert_eq!(BruteForce.find("abacada").text, "aba");
        assert_eq!(BruteForce.find("aaaa").text, "aaaa");
        assert_eq!(BruteForce.find("").text, "");
        assert_eq!(BruteForce.find("ab").text, "a");
    }

    #[test]
    fn test_brute_force_reports_start() {
        let found = BruteForce.find("xyzabbaq");
        assert_eq!(found.start, 3);
        assert_eq!(found.len, 4);
    }
}
