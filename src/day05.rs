use crate::util::{nums, Example};
use indoc::indoc;
use itertools::Itertools;
use std::ops::Range;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "35", input: ALMANAC},
    Example {part: 2, expected: "46", input: ALMANAC},
];

const ALMANAC: &str = indoc! {"
    seeds: 79 14 55 13

    seed-to-soil map:
    50 98 2
    52 50 48

    soil-to-fertilizer map:
    0 15 37
    37 52 2
    39 0 15

    fertilizer-to-water map:
    49 53 8
    0 11 42
    42 0 7
    57 7 4

    water-to-light map:
    88 18 7
    18 25 70

    light-to-temperature map:
    45 77 23
    81 45 19
    68 64 13

    temperature-to-humidity map:
    0 69 1
    1 0 69

    humidity-to-location map:
    60 56 37
    56 93 4
"};

/// One `dst src len` line: values in `src` shift by `dst - src.start`.
#[derive(Debug, Clone, PartialEq)]
struct Shift {src: Range<u64>, dst: u64}

/// A category map, sorted by source start. Values outside every range map to themselves.
#[derive(Debug)]
struct Mapping(Vec<Shift>);

impl Mapping {
    fn parse(block: &str) -> Mapping {
        let mut shifts = block.lines().skip(1).map(|line| match nums::<u64>(line)[..] {
            [dst, src, len] => Shift {src: src .. src + len, dst},
            _ => panic!("cannot parse mapping line {}", line)
        }).collect::<Vec<_>>();
        shifts.sort_unstable_by_key(|shift| shift.src.start);
        Mapping(shifts)
    }

    fn convert(&self, value: u64) -> u64 {
        self.0.iter().find(|shift| shift.src.contains(&value))
            .map_or(value, |shift| shift.dst + value - shift.src.start)
    }

    /// Maps a whole interval, splitting it wherever it crosses a range boundary.
    fn convert_range(&self, range: Range<u64>, out: &mut Vec<Range<u64>>) {
        let mut at = range.start;
        for shift in &self.0 {
            if at >= range.end {break}
            if shift.src.end <= at {continue}
            if shift.src.start >= range.end {break}
            if at < shift.src.start {
                out.push(at .. shift.src.start);
                at = shift.src.start;
            }
            let end = range.end.min(shift.src.end);
            out.push(shift.dst + at - shift.src.start .. shift.dst + end - shift.src.start);
            at = end;
        }
        if at < range.end {out.push(at .. range.end)}
    }
}

fn parse(input: &str) -> (Vec<u64>, Vec<Mapping>) {
    let mut blocks = input.trim().split("\n\n");
    let seeds = blocks.next().and_then(|line| line.strip_prefix("seeds:"))
                      .unwrap_or_else(|| panic!("expected a seeds line"));
    let mappings = blocks.map(Mapping::parse).collect::<Vec<_>>();
    assert_eq!(mappings.len(), 7, "expected seven category maps");
    (nums(seeds), mappings)
}

pub fn day5(part: u8, input: &str) -> String {
    let input = input.replace("\r\n", "\n");
    let (seeds, mappings) = parse(&input);
    if part == 1 {
        seeds.iter().map(|&seed|
            mappings.iter().fold(seed, |value, mapping| mapping.convert(value))
        ).min().expect("no seeds").to_string()
    } else {
        let mut ranges = seeds.iter().tuples().map(|(&start, &len)| start .. start + len).collect::<Vec<_>>();
        let mut next = vec![];
        for mapping in &mappings {
            for range in ranges.drain(..) {mapping.convert_range(range, &mut next)}
            std::mem::swap(&mut ranges, &mut next);
        }
        log::debug!("{} location intervals", ranges.len());
        ranges.iter().map(|range| range.start).min().expect("no seed ranges").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unmapped_values_pass_through() {
        let (_, mappings) = parse(ALMANAC);
        assert_eq!(mappings[0].convert(79), 81);
        assert_eq!(mappings[0].convert(14), 14);
        assert_eq!(mappings[0].convert(99), 51);
    }

    #[test]
    fn range_split_at_boundaries() {
        let mapping = Mapping::parse("x map:\n50 98 2\n52 50 48");
        let mut out = vec![];
        mapping.convert_range(40 .. 100, &mut out);
        assert_eq!(out, vec![40 .. 50, 52 .. 100, 50 .. 52]);
    }

    #[test]
    fn intervals_agree_with_brute_force() {
        let (seeds, mappings) = parse(ALMANAC);
        let brute_force = seeds.iter().tuples().flat_map(|(&start, &len)| start .. start + len)
            .map(|seed| mappings.iter().fold(seed, |value, mapping| mapping.convert(value)))
            .min().unwrap();
        assert_eq!(day5(2, ALMANAC), brute_force.to_string());
    }
}
