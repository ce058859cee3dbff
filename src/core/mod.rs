pub mod brute_force;
pub mod engine;
pub mod expand_center;
pub mod manacher;
pub mod output;
pub mod scenarios;

pub use crate::domain::model::{PalindromeMatch, SearchReport, Span, Strategy};
pub use crate::domain::ports::PalindromeFinder;
pub use crate::utils::error::Result;

use brute_force::BruteForce;
use expand_center::ExpandAroundCenter;
use manacher::Manacher;

pub fn finder_for(strategy: Strategy) -> Box<dyn PalindromeFinder> {
    match strategy {
        Strategy::BruteForce => Box::new(BruteForce),
        Strategy::ExpandAroundCenter => Box::new(ExpandAroundCenter),
        Strategy::Manacher => Box::new(Manacher),
    }
}
