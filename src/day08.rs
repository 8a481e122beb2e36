use crate::util::{lcm, Example};
use indoc::indoc;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "2", input: indoc! {"
        RL

        AAA = (BBB, CCC)
        BBB = (DDD, EEE)
        CCC = (ZZZ, GGG)
        DDD = (DDD, DDD)
        EEE = (EEE, EEE)
        GGG = (GGG, GGG)
        ZZZ = (ZZZ, ZZZ)
    "}},
    Example {part: 1, expected: "6", input: indoc! {"
        LLR

        AAA = (BBB, BBB)
        BBB = (AAA, ZZZ)
        ZZZ = (ZZZ, ZZZ)
    "}},
    Example {part: 2, expected: "6", input: indoc! {"
        LR

        11A = (11B, XXX)
        11B = (XXX, 11Z)
        11Z = (11B, XXX)
        22A = (22B, XXX)
        22B = (22C, 22C)
        22C = (22Z, 22Z)
        22Z = (22B, 22B)
        XXX = (XXX, XXX)
    "}},
];

struct Network<'a> {
    turns: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Network<'a> {
        let mut lines = input.trim().lines();
        let turns = lines.next().expect("empty network").trim().as_bytes();
        let re = Regex::new(r"^(\w{3}) = \((\w{3}), (\w{3})\)$").unwrap();
        let nodes = lines.filter(|line| !line.trim().is_empty()).map(|line| {
            let Some(caps) = re.captures(line.trim()) else {panic!("cannot parse node {}", line)};
            let (_, [name, left, right]) = caps.extract();
            (name, (left, right))
        }).collect();
        Network {turns, nodes}
    }

    fn step(&self, node: &'a str, steps: usize) -> &'a str {
        let &(left, right) = self.nodes.get(node).unwrap_or_else(|| panic!("unknown node {}", node));
        match self.turns[steps % self.turns.len()] {
            b'L' => left,
            b'R' => right,
            turn => panic!("unexpected turn '{}'", turn as char)
        }
    }

    /// Walks from `start` until a (node, instruction) state repeats and returns
    /// every step count at which a `..Z` node was reached along the way.
    fn z_hits(&self, start: &'a str) -> Vec<u64> {
        let mut seen = FxHashSet::default();
        let mut hits = vec![];
        let mut node = start;
        for steps in 0 .. {
            if !seen.insert((node, steps % self.turns.len())) {break}
            if node.ends_with('Z') {hits.push(steps as u64)}
            node = self.step(node, steps);
        }
        hits
    }
}

pub fn day8(part: u8, input: &str) -> String {
    let network = Network::parse(input);
    if part == 1 {
        let mut node = "AAA";
        let mut steps = 0;
        while node != "ZZZ" {
            node = network.step(node, steps);
            steps += 1;
        }
        steps.to_string()
    } else {
        let hits = network.nodes.keys().filter(|name| name.ends_with('A')).sorted()
                          .map(|&start| network.z_hits(start)).collect::<Vec<_>>();
        log::debug!("z hits per ghost: {:?}", hits);
        hits.iter().multi_cartesian_product()
            .map(|combo| combo.into_iter().fold(1, |acc, &steps| lcm(acc, steps)))
            .min().expect("no ghost ever reaches a Z node").to_string()
    }
}
