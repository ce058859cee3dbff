use crate::core::finder_for;
use crate::domain::model::{PalindromeMatch, SearchReport, Strategy};
use crate::domain::ports::PalindromeFinder;

pub struct PalindromeEngine<F: PalindromeFinder> {
    finder: F,
}

impl<F: PalindromeFinder> PalindromeEngine<F> {
    pub fn new(finder: F) -> Self {
        Self { finder }
    }

    pub fn find(&self, text: &str) -> PalindromeMatch {
        let found = self.finder.find(text);
        tracing::debug!(
            strategy = self.finder.name(),
            input_chars = text.chars().count(),
            start = found.start,
            len = found.len,
            "palindrome search finished"
        );
        found
    }

    pub fn report(&self, text: &str) -> SearchReport {
        SearchReport {
            input: text.to_string(),
            strategy: self.finder.name().to_string(),
            found: self.find(text),
        }
    }

    pub fn report_all(&self, inputs: &[String]) -> Vec<SearchReport> {
        tracing::info!(
            "🔍 Searching {} input(s) with {}",
            inputs.len(),
            self.finder.name()
        );
        inputs.iter().map(|text| self.report(text)).collect()
    }
}

impl PalindromeEngine<Box<dyn PalindromeFinder>> {
    pub fn for_strategy(strategy: Strategy) -> Self {
        Self::new(finder_for(strategy))
    }
}
