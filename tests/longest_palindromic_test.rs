use palindromic::core::scenarios::{verify_match, SCENARIOS};
use palindromic::{longest_palindromic, BruteForce, ExpandAroundCenter, Manacher, PalindromeFinder};

fn finders() -> Vec<Box<dyn PalindromeFinder>> {
    vec![
        Box::new(BruteForce),
        Box::new(ExpandAroundCenter),
        Box::new(Manacher),
    ]
}

/// Every string over `alphabet` with length up to `max_len`, shortest first.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut next = prefix.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

#[test]
fn test_known_scenarios() {
    for (input, expected) in SCENARIOS {
        assert_eq!(longest_palindromic(input), *expected, "input {:?}", input);
    }
}

#[test]
fn test_all_distinct_characters_yield_first() {
    assert_eq!(longest_palindromic("abcdefg"), "a");
    assert_eq!(longest_palindromic("z"), "z");
}

#[test]
fn test_whole_string_palindrome() {
    assert_eq!(longest_palindromic("racecar"), "racecar");
    assert_eq!(longest_palindromic("abba"), "abba");
}

#[test]
fn test_equal_length_tie_goes_to_earliest_start() {
    for finder in finders() {
        let found = finder.find("abacdc");
        assert_eq!(found.text, "aba", "{}", finder.name());
        assert_eq!(found.start, 0, "{}", finder.name());

        let found = finder.find("xyzzyxabba");
        assert_eq!(found.text, "xyzzyx", "{}", finder.name());
    }
}

#[test]
fn test_multibyte_characters_are_whole_units() {
    for finder in finders() {
        let found = finder.find("añña!");
        assert_eq!(found.text, "añña", "{}", finder.name());
        assert_eq!((found.start, found.len), (0, 4), "{}", finder.name());

        let found = finder.find("🙂🙃🙂x");
        assert_eq!(found.text, "🙂🙃🙂", "{}", finder.name());
    }
}

#[test]
fn test_strategies_agree_exhaustively() {
    let inputs = all_strings(&['a', 'b', 'c'], 8);
    for input in &inputs {
        let reference = BruteForce.find(input);
        assert_eq!(ExpandAroundCenter.find(input), reference, "input {:?}", input);
        assert_eq!(Manacher.find(input), reference, "input {:?}", input);
    }
}

#[test]
fn test_results_satisfy_invariants() {
    for input in all_strings(&['a', 'b'], 7) {
        let found = Manacher.find(&input);
        verify_match(&input, &found)
            .unwrap_or_else(|e| panic!("invariant broken for {:?}: {}", input, e));
    }
}

#[test]
fn test_idempotent() {
    for input in ["artrartrt", "abacada", "", "mississippi"] {
        assert_eq!(longest_palindromic(input), longest_palindromic(input));
    }
}
