use crate::util::{nums, Example};
use indoc::indoc;
use itertools::Itertools;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "114", input: HISTORIES},
    Example {part: 2, expected: "2", input: HISTORIES},
];

const HISTORIES: &str = indoc! {"
    0 3 6 9 12 15
    1 3 6 10 15 21
    10 13 16 21 30 45
"};

fn extrapolate(values: Vec<i64>) -> i64 {
    let mut rows = vec![values];
    while let Some(last) = rows.last().filter(|row| row.iter().any(|&x| x != 0)) {
        let diffs = last.iter().tuple_windows().map(|(a, b)| b - a).collect::<Vec<_>>();
        assert!(!diffs.is_empty(), "differences never reach zero");
        rows.push(diffs);
    }
    rows.iter().rev().map(|row| row.last().copied().unwrap_or(0)).sum()
}

pub fn day9(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let mut values = nums::<i64>(line);
        // the previous value is the next value of the reversed history
        if part == 2 {values.reverse()}
        extrapolate(values)
    }).sum::<i64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_values() {
        assert_eq!(extrapolate(vec![0, 3, 6, 9, 12, 15]), 18);
        assert_eq!(extrapolate(vec![10, 13, 16, 21, 30, 45]), 68);
    }

    #[test]
    fn negative_sequences() {
        assert_eq!(extrapolate(vec![-2, -4, -6]), -8);
        assert_eq!(day9(1, "5 1 -3 -7"), "-11");
        assert_eq!(day9(2, "10 13 16 21 30 45"), "5");
    }

    #[test]
    fn constant_history() {
        assert_eq!(extrapolate(vec![7, 7, 7]), 7);
        assert_eq!(extrapolate(vec![0, 0]), 0);
    }
}
