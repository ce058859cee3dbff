use crate::domain::model::Span;
use crate::domain::ports::PalindromeFinder;

/// O(n^2) search growing a window outward from each of the 2n-1 centers.
///
/// Centers are visited left to right, so among palindromes of the maximal
/// length the one with the smallest start is reached first and kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandAroundCenter;

impl ExpandAroundCenter {
    /// Grows the palindrome `chars[left..right]` while its neighbours match.
    fn expand(chars: &[char], mut left: usize, mut right: usize) -> Span {
        while left > 0 && right < chars.len() && chars[left - 1] == chars[right] {
            left -= 1;
            right += 1;
        }
        Span::new(left, right - left)
    }
}

impl PalindromeFinder for ExpandAroundCenter {
    fn name(&self) -> &'static str {
        "expand-around-center"
    }

    fn longest_span(&self, chars: &[char]) -> Span {
        let mut best = Span::default();

        for center in 0..chars.len() {
            // odd length, centred on chars[center]
            best.keep_longer(Self::expand(chars, center, center + 1));
            // even length, centred between chars[center] and chars[center + 1]
            best.keep_longer(Self::expand(chars, center + 1, center + 1));
        }

        best
    }
}
