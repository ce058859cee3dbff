use crate::domain::model::{PalindromeMatch, Span};

pub trait PalindromeFinder: Send + Sync {
    fn name(&self) -> &'static str;

    /// Longest palindromic span of `chars`; ties go to the smallest start.
    /// An empty input yields `Span { start: 0, len: 0 }`. The span must lie
    /// within `chars`.
    fn longest_span(&self, chars: &[char]) -> Span;

    fn find(&self, text: &str) -> PalindromeMatch {
        let chars: Vec<char> = text.chars().collect();
        let span = self.longest_span(&chars);
        PalindromeMatch::from_span(&chars, span)
    }
}

impl<F: PalindromeFinder + ?Sized> PalindromeFinder for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn longest_span(&self, chars: &[char]) -> Span {
        (**self).longest_span(chars)
    }
}
