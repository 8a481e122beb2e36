use crate::util::{nums, Example};
use indoc::indoc;
use std::iter::zip;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "288", input: RACES},
    Example {part: 2, expected: "71503", input: RACES},
];

const RACES: &str = indoc! {"
    Time:      7  15   30
    Distance:  9  40  200
"};

/// Number of hold times `t` in `0 ..= time` with `t * (time - t) > record`.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |t: u64| t * (time - t) > record;
    // distance rises up to time / 2, so the first winning hold is a partition point
    let (mut lo, mut hi) = (0, time / 2 + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if beats(mid) {hi = mid} else {lo = mid + 1}
    }
    if lo > time / 2 {0} else {time - 2 * lo + 1}
}

pub fn day6(part: u8, input: &str) -> String {
    let mut lines = input.trim().lines();
    let (Some(times), Some(records)) = (
        lines.next().and_then(|line| line.strip_prefix("Time:")),
        lines.next().and_then(|line| line.strip_prefix("Distance:")),
    ) else {panic!("expected Time: and Distance: lines")};

    if part == 1 {
        zip(nums::<u64>(times), nums::<u64>(records))
            .map(|(time, record)| ways_to_win(time, record))
            .product::<u64>().to_string()
    } else {
        let kerning = |s: &str| s.replace(' ', "").parse::<u64>().expect(s);
        ways_to_win(kerning(times), kerning(records)).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_enumeration() {
        for time in 0 .. 40 {
            for record in 0 .. 100 {
                let expected = (0 ..= time).filter(|t| t * (time - t) > record).count() as u64;
                assert_eq!(ways_to_win(time, record), expected, "time {} record {}", time, record);
            }
        }
    }

    #[test]
    fn single_races() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
    }
}
