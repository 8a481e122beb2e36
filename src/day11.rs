use crate::util::Example;
use bitvec::prelude::*;
use indoc::indoc;
use itertools::Itertools;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "374", input: IMAGE},
    Example {part: 2, expected: "82000210", input: IMAGE},
];

const IMAGE: &str = indoc! {"
    ...#......
    .......#..
    #.........
    ..........
    ......#...
    .#........
    .........#
    ..........
    .......#..
    #...#.....
"};

/// Galaxy positions after every empty row and column has grown to `factor` lines.
fn expanded_galaxies(input: &str, factor: u64) -> Vec<(u64, u64)> {
    let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
    let cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut empty_rows = bitvec![1; grid.len()];
    let mut empty_cols = bitvec![1; cols];
    let mut galaxies = vec![];
    for (ri, row) in grid.iter().enumerate() {
        for (ci, &cell) in row.iter().enumerate() {
            match cell {
                b'#' => {
                    empty_rows.set(ri, false);
                    empty_cols.set(ci, false);
                    galaxies.push((ri, ci));
                },
                b'.' => (),
                x => panic!("unexpected character '{}' at ({}, {})", x as char, ri, ci)
            }
        }
    }

    // expanded coordinate = original + (factor - 1) * empty lines before it
    let shifts = |empty: &BitSlice| empty.iter().scan(0u64, |seen, is_empty| {
        let before = *seen;
        if *is_empty {*seen += 1}
        Some(before)
    }).collect::<Vec<_>>();
    let row_shift = shifts(&empty_rows);
    let col_shift = shifts(&empty_cols);
    galaxies.into_iter().map(|(ri, ci)| (
        ri as u64 + (factor - 1) * row_shift[ri],
        ci as u64 + (factor - 1) * col_shift[ci],
    )).collect()
}

fn sum_of_distances(input: &str, factor: u64) -> u64 {
    expanded_galaxies(input, factor).iter().tuple_combinations()
        .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
        .sum()
}

pub fn day11(part: u8, input: &str) -> String {
    let factor = if part == 1 {2} else {1_000_000};
    sum_of_distances(input, factor).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn other_expansion_factors() {
        assert_eq!(sum_of_distances(IMAGE, 10), 1030);
        assert_eq!(sum_of_distances(IMAGE, 100), 8410);
    }

    #[test]
    fn expansion_moves_galaxies() {
        let galaxies = expanded_galaxies(IMAGE, 2);
        assert_eq!(galaxies[0], (0, 4));
        assert_eq!(galaxies[galaxies.len() - 1], (11, 5));
    }

    #[test]
    fn small_grids() {
        assert_eq!(sum_of_distances("#.\n.#", 1), 2);
        assert_eq!(sum_of_distances("#..\n...\n..#", 3), 8);
    }
}
