use crate::util::Example;
use arrayvec::ArrayVec;
use indoc::indoc;
use itertools::Itertools;

pub const EXAMPLES: &[Example] = &[
    Example {part: 1, expected: "6440", input: HANDS},
    Example {part: 2, expected: "5905", input: HANDS},
];

const HANDS: &str = indoc! {"
    32T3K 765
    T55J5 684
    KK677 28
    KTJJT 220
    QQQJA 483
"};

const ORDER: &[u8] = b"23456789TJQKA";
const JOKER_ORDER: &[u8] = b"J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {HighCard, OnePair, TwoPair, ThreeOfAKind, FullHouse, FourOfAKind, FiveOfAKind}

fn hand_type(cards: &[u8], jokers: bool) -> HandType {
    let n_jokers = if jokers {cards.iter().filter(|&&card| card == b'J').count()} else {0};
    let mut groups = cards.iter().filter(|&&card| !jokers || card != b'J').counts()
                          .into_values().collect::<ArrayVec<usize, 5>>();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    // jokers always join the largest group
    match groups.first_mut() {
        Some(largest) => *largest += n_jokers,
        None => groups.push(n_jokers)
    }
    match groups[..] {
        [5] => HandType::FiveOfAKind,
        [4, 1] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        [3, 1, 1] => HandType::ThreeOfAKind,
        [2, 2, 1] => HandType::TwoPair,
        [2, 1, 1, 1] => HandType::OnePair,
        [1, 1, 1, 1, 1] => HandType::HighCard,
        _ => panic!("not a five-card hand: {}", String::from_utf8_lossy(cards))
    }
}

pub fn day7(part: u8, input: &str) -> String {
    let jokers = part == 2;
    let order = if jokers {JOKER_ORDER} else {ORDER};
    input.trim().lines().map(|line| {
        let Some((cards, bid)) = line.split_once(' ') else {panic!("cannot parse hand {}", line)};
        let strengths = cards.bytes().map(|card|
            order.iter().position(|&c| c == card).unwrap_or_else(|| panic!("unexpected card {}", card as char))
        ).collect::<ArrayVec<usize, 5>>();
        ((hand_type(cards.as_bytes(), jokers), strengths), bid.trim().parse::<u64>().expect(line))
    }).sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
      .zip(1 ..)
      .map(|((_, bid), rank)| rank * bid)
      .sum::<u64>().to_string()
}
