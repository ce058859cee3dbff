pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::InputSource, CliConfig, Command};

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    brute_force::BruteForce, engine::PalindromeEngine, expand_center::ExpandAroundCenter,
    manacher::Manacher,
};
pub use domain::model::{OutputFormat, PalindromeMatch, Strategy};
pub use domain::ports::PalindromeFinder;
pub use utils::error::{PalindromeError, Result};

/// Longest palindromic substring of `text`, earliest occurrence on ties.
///
/// Total over every input: the empty string yields the empty string.
pub fn longest_palindromic(text: &str) -> String {
    Manacher.find(text).text
}
