use std::fmt::Debug;
use std::str::FromStr;

/// A built-in example a solver must reproduce before it is trusted with real input.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub part: u8,
    pub input: &'static str,
    pub expected: &'static str,
}

/// Whitespace-separated integers; panics on a token that does not parse.
pub fn nums<T: FromStr>(s: &str) -> Vec<T> where T::Err: Debug {
    s.split_ascii_whitespace().map(|tok|
        tok.parse().unwrap_or_else(|e| panic!("cannot parse {:?} as a number: {:?}", tok, e))
    ).collect()
}

pub fn digit(b: u8) -> Option<u32> {
    b.is_ascii_digit().then(|| (b - b'0') as u32)
}

pub fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
pub fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}
