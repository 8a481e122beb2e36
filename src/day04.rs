use crate::util::{nums, Example};
use indoc::indoc;
use rustc_hash::FxHashSet;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "13", input: CARDS},
    Example {part: 2, expected: "30", input: CARDS},
];

const CARDS: &str = indoc! {"
    Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
    Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
    Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
    Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
    Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
    Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
"};

fn matches(line: &str) -> usize {
    let numbers = line.split_once(": ").map(|(_, numbers)| numbers);
    let Some((winning, have)) = numbers.and_then(|numbers| numbers.split_once(" | ")) else {
        panic!("cannot parse card {}", line)
    };
    let winning: FxHashSet<u32> = nums::<u32>(winning).into_iter().collect();
    let have: FxHashSet<u32> = nums::<u32>(have).into_iter().collect();
    winning.intersection(&have).count()
}

pub fn day4(part: u8, input: &str) -> String {
    let matches = input.trim().lines().map(matches).collect::<Vec<_>>();
    if part == 1 {
        matches.iter().filter(|&&m| m > 0).map(|&m| 1u64 << (m - 1)).sum::<u64>().to_string()
    } else {
        let mut copies = vec![1u64; matches.len()];
        for (ix, &m) in matches.iter().enumerate() {
            let won = copies[ix];
            for copy in copies.iter_mut().skip(ix + 1).take(m) {*copy += won}
        }
        copies.iter().sum::<u64>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_matches() {
        assert_eq!(matches("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53"), 4);
        assert_eq!(matches("Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11"), 0);
    }

    #[test]
    fn copies_stop_at_the_last_card() {
        // card 2 would win a copy of a nonexistent card 3
        assert_eq!(day4(2, "Card 1: 1 | 1\nCard 2: 2 | 2"), "3");
    }
}
