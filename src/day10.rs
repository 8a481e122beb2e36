use crate::util::Example;
use bitvec::prelude::*;
use indoc::indoc;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "4", input: indoc! {"
        .....
        .S-7.
        .|.|.
        .L-J.
        .....
    "}},
    Example {part: 1, expected: "4", input: indoc! {"
        -L|F7
        7S-7|
        L|7||
        -L-J|
        L|-JF
    "}},
    Example {part: 1, expected: "8", input: indoc! {"
        ..F7.
        .FJ|.
        SJ.L7
        |F--J
        LJ...
    "}},
    Example {part: 1, expected: "8", input: indoc! {"
        7-F7-
        .FJ|7
        SJLL7
        |F--J
        LJ.LJ
    "}},
    Example {part: 2, expected: "4", input: indoc! {"
        ...........
        .S-------7.
        .|F-----7|.
        .||.....||.
        .||.....||.
        .|L-7.F-J|.
        .|..|.|..|.
        .L--J.L--J.
        ...........
    "}},
    Example {part: 2, expected: "4", input: indoc! {"
        ..........
        .S------7.
        .|F----7|.
        .||....||.
        .||....||.
        .|L-7F-J|.
        .|..||..|.
        .L--JL--J.
        ..........
    "}},
    Example {part: 2, expected: "8", input: indoc! {"
        .F----7F7F7F7F-7....
        .|F--7||||||||FJ....
        .||.FJ||||||||L7....
        FJL7L7LJLJ||LJ.L-7..
        L--J.L7...LJS7F-7L7.
        ....F-J..F7FJ|L7L7L7
        ....L7.F7||L7|.L7L7|
        .....|FJLJ|FJ|F7|.LJ
        ....FJL-7.||.||||...
        ....L---J.LJ.LJLJ...
    "}},
    Example {part: 2, expected: "10", input: indoc! {"
        FF7FSF7F7F7F7F7F---7
        L|LJ||||||||||||F--J
        FL-7LJLJ||||||LJL-77
        F--JF--7||LJLJ7F7FJ-
        L---JF-JLJ.||-FJLJJ7
        |F|F-JF---7F7-L7L|7|
        |FFJF7L7F-JF7|JL---7
        7-L-JL7||F7|L7F-7F7|
        L.L7LFJ|||||FJL7||LJ
        L7JLJL-JLJLJL--JLJ.L
    "}},
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {North, East, South, West}

impl Dir {
    const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    fn opposite(self) -> Dir {
        match self {Dir::North => Dir::South, Dir::East => Dir::West, Dir::South => Dir::North, Dir::West => Dir::East}
    }

    fn step(self, (ri, ci): (usize, usize)) -> (usize, usize) {
        // wraps to usize::MAX off the top/left edge, which then fails the bounds check
        match self {
            Dir::North => (ri.wrapping_sub(1), ci), Dir::East => (ri, ci + 1),
            Dir::South => (ri + 1, ci), Dir::West => (ri, ci.wrapping_sub(1)),
        }
    }
}

fn ends(tile: u8) -> Option<[Dir; 2]> {
    match tile {
        b'|' => Some([Dir::North, Dir::South]), b'-' => Some([Dir::East, Dir::West]),
        b'L' => Some([Dir::North, Dir::East]), b'J' => Some([Dir::North, Dir::West]),
        b'7' => Some([Dir::South, Dir::West]), b'F' => Some([Dir::South, Dir::East]),
        b'.' | b'S' => None,
        x => panic!("unexpected tile '{}'", x as char)
    }
}

fn tile_for(ends: [Dir; 2]) -> u8 {
    *b"|-LJ7F".iter().find(|&&tile| {
        let Some([a, b]) = self::ends(tile) else {unreachable!()};
        (a, b) == (ends[0], ends[1]) || (b, a) == (ends[0], ends[1])
    }).expect("start tile must join two distinct directions")
}

struct Maze<'a> {
    grid: Vec<&'a [u8]>,
    cols: usize,
    start: (usize, usize),
}

impl<'a> Maze<'a> {
    fn parse(input: &'a str) -> Maze<'a> {
        let grid = input.trim().lines().map(|line| line.trim().as_bytes()).collect::<Vec<_>>();
        let cols = grid.first().map_or(0, |row| row.len());
        assert!(grid.iter().all(|row| row.len() == cols), "maze rows differ in length");
        let start = grid.iter().enumerate().find_map(|(ri, row)|
            row.iter().position(|&x| x == b'S').map(|ci| (ri, ci))
        ).expect("no start tile in maze");
        Maze {grid, cols, start}
    }

    fn tile(&self, (ri, ci): (usize, usize)) -> Option<u8> {
        self.grid.get(ri).and_then(|row| row.get(ci)).copied()
    }

    /// Follows the pipe leaving the start towards `dir`. Returns the visited tiles and
    /// the direction the walk re-entered the start from, or `None` on a dead end.
    fn walk(&self, mut dir: Dir) -> Option<(Vec<(usize, usize)>, Dir)> {
        let mut at = self.start;
        let mut path = vec![at];
        loop {
            at = dir.step(at);
            let tile = self.tile(at)?;
            if tile == b'S' {return Some((path, dir.opposite()))}
            let [a, b] = ends(tile)?;
            dir = if a == dir.opposite() {b} else if b == dir.opposite() {a} else {return None};
            path.push(at);
        }
    }

    /// The closed loop through the start, and the pipe shape hidden under the start.
    fn main_loop(&self) -> (Vec<(usize, usize)>, u8) {
        Dir::ALL.iter().find_map(|&dir| {
            let (path, back) = self.walk(dir)?;
            (path.len() > 2).then(|| (path, tile_for([dir, back])))
        }).expect("the loop through the start never closes")
    }
}

pub fn day10(part: u8, input: &str) -> String {
    let maze = Maze::parse(input);
    let (path, start_tile) = maze.main_loop();
    log::debug!("loop of {} tiles, start is a '{}'", path.len(), start_tile as char);

    if part == 1 {
        (path.len() / 2).to_string()
    } else {
        let mut on_loop = bitvec![0; maze.grid.len() * maze.cols];
        for &(ri, ci) in &path {on_loop.set(ri * maze.cols + ci, true)}

        // a horizontal ray crosses the loop once per tile with a northward end
        maze.grid.iter().enumerate().map(|(ri, row)| {
            let mut inside = false;
            row.iter().enumerate().filter(|&(ci, &tile)| {
                if on_loop[ri * maze.cols + ci] {
                    let tile = if tile == b'S' {start_tile} else {tile};
                    if ends(tile).is_some_and(|ends| ends.contains(&Dir::North)) {inside = !inside}
                    false
                } else {inside}
            }).count()
        }).sum::<usize>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn infers_start_shape() {
        let maze = Maze::parse(EXAMPLES[0].input);
        let (path, start_tile) = maze.main_loop();
        assert_eq!(start_tile, b'F');
        assert_eq!(path.len(), 8);
        assert_eq!(path[0], (1, 1));
    }

    #[test]
    fn junk_pipes_do_not_join_the_loop() {
        let maze = Maze::parse(EXAMPLES[1].input);
        let (path, start_tile) = maze.main_loop();
        assert_eq!(start_tile, b'F');
        assert!(!path.contains(&(0, 1)));
    }

    #[test]
    fn start_on_the_edge() {
        let maze = Maze::parse(EXAMPLES[2].input);
        assert_eq!(maze.start, (2, 0));
        assert_eq!(maze.main_loop().1, b'F');
    }

    #[test]
    fn squeezed_gap_is_outside() {
        assert_eq!(day10(2, EXAMPLES[5].input), "4");
    }
}
