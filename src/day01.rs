use crate::util::{digit, Example};
use indoc::indoc;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "142", input: indoc! {"
        1abc2
        pqr3stu8vwx
        a1b2c3d4e5f
        treb7uchet
    "}},
    Example {part: 2, expected: "281", input: indoc! {"
        two1nine
        eightwothree
        abcone2threexyz
        xtwone3four
        4nineeightseven2
        zoneight234
        7pqrstsixteen
    "}},
];

const NAMES: [&str; 10] = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

// Spelled-out names only count in part 2; overlapping names ("twone") are fine
// since every position is tried on its own.
fn digit_at(part: u8, line: &[u8], at: usize) -> Option<u32> {
    digit(line[at]).or_else(|| if part == 1 {None} else {
        NAMES.iter().position(|name| line[at ..].starts_with(name.as_bytes())).map(|d| d as u32)
    })
}

pub fn day1(part: u8, input: &str) -> String {
    input.trim().lines().map(|line| {
        let line = line.as_bytes();
        let first = (0 .. line.len()).find_map(|at| digit_at(part, line, at));
        let last = (0 .. line.len()).rev().find_map(|at| digit_at(part, line, at));
        match (first, last) {
            (Some(first), Some(last)) => 10 * first as u64 + last as u64,
            _ => panic!("no digit in line {:?}", String::from_utf8_lossy(line))
        }
    }).sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn overlapping_names() {
        assert_eq!(day1(2, "twone\n"), "21");
        assert_eq!(day1(2, "eighthree"), "83");
        assert_eq!(day1(2, "sevenine"), "79");
    }

    #[test]
    fn single_digit_counts_twice() {
        assert_eq!(day1(1, "treb7uchet"), "77");
        assert_eq!(day1(2, "xxsixxx"), "66");
    }

    #[test]
    fn names_ignored_in_part_one() {
        assert_eq!(day1(1, "one2three4"), "24");
    }
}
