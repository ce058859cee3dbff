use crate::domain::model::Span;
use crate::domain::ports::PalindromeFinder;

/// Linear-time search (Manacher).
///
/// Works on the text interleaved with gaps (`_a_b_a_`), where every
/// palindrome has odd length and a radius at position `i` equals the length
/// of the matching palindrome in the original text, starting at
/// `(i - radius) / 2`. Positions are scanned left to right and only strictly
/// longer spans replace the best, which keeps the earliest start on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manacher;

impl PalindromeFinder for Manacher {
    fn name(&self) -> &'static str {
        "manacher"
    }

    fn longest_span(&self, chars: &[char]) -> Span {
        let gapped: Vec<Option<char>> = (0..2 * chars.len() + 1)
            .map(|i| (i % 2 == 1).then(|| chars[i / 2]))
            .collect();
        let len = gapped.len();

        let mut radii = vec![0usize; len];
        let mut center = 0;
        let mut right = 0;
        let mut best = Span::default();

        for i in 0..len {
            let mut radius = if i < right {
                radii[2 * center - i].min(right - i)
            } else {
                0
            };

            while radius < i && i + radius + 1 < len && gapped[i - radius - 1] == gapped[i + radius + 1]
            {
                radius += 1;
            }

            radii[i] = radius;
            if i + radius > right {
                center = i;
                right = i + radius;
            }

            best.keep_longer(Span::new((i - radius) / 2, radius));
        }

        best
    }
}
