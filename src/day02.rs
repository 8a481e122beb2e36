use crate::util::Example;
use indoc::indoc;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "8", input: GAMES},
    Example {part: 2, expected: "2286", input: GAMES},
];

const GAMES: &str = indoc! {"
    Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
    Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
    Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
    Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
    Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
"};

const BAG: Cubes = Cubes {red: 12, green: 13, blue: 14};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Cubes {red: u64, green: u64, blue: u64}

impl Cubes {
    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {red: self.red.max(other.red), green: self.green.max(other.green), blue: self.blue.max(other.blue)}
    }

    fn power(&self) -> u64 {self.red * self.green * self.blue}
}

fn parse_game(line: &str) -> (u64, Vec<Cubes>) {
    let Some((id, reveals)) = line.split_once(": ") else {panic!("cannot parse game {}", line)};
    let id = id.strip_prefix("Game ").and_then(|id| id.parse().ok())
               .unwrap_or_else(|| panic!("cannot parse game id in {}", line));
    let reveals = reveals.split("; ").map(|reveal| {
        let mut cubes = Cubes::default();
        for pair in reveal.split(", ") {
            let Some((n, colour)) = pair.split_once(' ') else {panic!("cannot parse cubes {}", pair)};
            let n = n.parse().expect(pair);
            match colour {
                "red" => cubes.red = n,
                "green" => cubes.green = n,
                "blue" => cubes.blue = n,
                _ => panic!("unexpected colour {}", colour)
            }
        }
        cubes
    }).collect();
    (id, reveals)
}

pub fn day2(part: u8, input: &str) -> String {
    input.trim().lines().map(parse_game).map(|(id, reveals)| {
        if part == 1 {
            if reveals.iter().all(|cubes| cubes.fits_in(&BAG)) {id} else {0}
        } else {
            reveals.into_iter().fold(Cubes::default(), Cubes::max).power()
        }
    }).sum::<u64>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_reveals() {
        let (id, reveals) = parse_game("Game 17: 3 blue, 4 red; 2 green");
        assert_eq!(id, 17);
        assert_eq!(reveals, vec![
            Cubes {red: 4, green: 0, blue: 3},
            Cubes {red: 0, green: 2, blue: 0},
        ]);
    }

    #[test]
    fn minimum_set_power() {
        assert_eq!(day2(2, "Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red"), "1560");
    }

    #[test]
    fn over_limit_game_is_impossible() {
        assert_eq!(day2(1, "Game 4: 1 green, 3 red, 6 blue; 3 green, 15 blue, 14 red"), "0");
    }
}
