use crate::util::Example;
use indoc::indoc;
use rustc_hash::FxHashMap;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "4361", input: SCHEMATIC},
    Example {part: 2, expected: "467835", input: SCHEMATIC},
];

const SCHEMATIC: &str = indoc! {"
    467..114..
    ...*......
    ..35..633.
    ......#...
    617*......
    .....+.58.
    ..592.....
    ......755.
    ...$.*....
    .664.598..
"};

fn is_symbol(cell: u8) -> bool {cell != b'.' && !cell.is_ascii_digit()}

/// A number on the schematic: its value and the half-open column span it covers.
#[derive(Debug, PartialEq)]
struct PartNumber {value: u64, row: usize, cols: (usize, usize)}

impl PartNumber {
    /// Every in-bounds cell touching the number, diagonals included.
    fn border<'a>(&self, grid: &'a [&'a [u8]]) -> impl Iterator<Item = (usize, usize)> + 'a {
        let (start, end) = self.cols;
        let row = self.row;
        (row.saturating_sub(1) ..= row + 1).filter(move |&ri| ri < grid.len()).flat_map(move |ri|
            (start.saturating_sub(1) ..= end).filter(move |&ci|
                ci < grid[ri].len() && (ri != row || ci < start || ci >= end)
            ).map(move |ci| (ri, ci))
        )
    }
}

fn numbers(grid: &[&[u8]]) -> Vec<PartNumber> {
    let mut numbers = vec![];
    for (ri, row) in grid.iter().enumerate() {
        let mut ci = 0;
        while ci < row.len() {
            if !row[ci].is_ascii_digit() {ci += 1; continue}
            let start = ci;
            let mut value = 0;
            while ci < row.len() && row[ci].is_ascii_digit() {
                value = 10 * value + (row[ci] - b'0') as u64;
                ci += 1;
            }
            numbers.push(PartNumber {value, row: ri, cols: (start, ci)});
        }
    }
    numbers
}

pub fn day3(part: u8, input: &str) -> String {
    let grid = input.trim().lines().map(|line| line.as_bytes()).collect::<Vec<_>>();
    let numbers = numbers(&grid);

    if part == 1 {
        numbers.iter().filter(|number|
            number.border(&grid).any(|(ri, ci)| is_symbol(grid[ri][ci]))
        ).map(|number| number.value).sum::<u64>().to_string()
    } else {
        let mut gears: FxHashMap<(usize, usize), Vec<u64>> = FxHashMap::default();
        for number in &numbers {
            for (ri, ci) in number.border(&grid).filter(|&(ri, ci)| grid[ri][ci] == b'*') {
                gears.entry((ri, ci)).or_default().push(number.value);
            }
        }
        gears.values().filter_map(|adjacent| match adjacent[..] {
            [a, b] => Some(a * b),
            _ => None
        }).sum::<u64>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_numbers_at_row_edges() {
        let grid = ["12.", "..7"].map(str::as_bytes);
        assert_eq!(numbers(&grid), vec![
            PartNumber {value: 12, row: 0, cols: (0, 2)},
            PartNumber {value: 7, row: 1, cols: (2, 3)},
        ]);
    }

    #[test]
    fn border_stays_in_bounds() {
        let grid = ["12.", "..7"].map(str::as_bytes);
        let number = PartNumber {value: 7, row: 1, cols: (2, 3)};
        assert_eq!(number.border(&grid).collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn star_with_three_numbers_is_not_a_gear() {
        assert_eq!(day3(2, "1.2\n.*.\n..3"), "0");
        assert_eq!(day3(2, "1.2\n.*.\n..."), "2");
    }
}
