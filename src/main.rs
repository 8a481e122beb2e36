mod util;
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;

use std::path::PathBuf;
use std::process::ExitCode;
use util::Example;

type Solver = fn(u8, &str) -> String;

const DAYS: [(Solver, &[Example]); 11] = [
    (day01::day1, day01::EXAMPLES), (day02::day2, day02::EXAMPLES), (day03::day3, day03::EXAMPLES),
    (day04::day4, day04::EXAMPLES), (day05::day5, day05::EXAMPLES), (day06::day6, day06::EXAMPLES),
    (day07::day7, day07::EXAMPLES), (day08::day8, day08::EXAMPLES), (day09::day9, day09::EXAMPLES),
    (day10::day10, day10::EXAMPLES), (day11::day11, day11::EXAMPLES),
];

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error("usage: aoc2023 <day> <part> [input-file]")]
    Usage,
    #[error("invalid {name} {value:?}")]
    BadArgument {name: &'static str, value: String},
    #[error("no solution for day {0}")]
    UnknownDay(usize),
    #[error("couldn't open file {}: {source}", path.display())]
    Read {path: PathBuf, source: std::io::Error},
    #[error("day {day} part {part} example gave {actual}, expected {expected}")]
    ExampleMismatch {day: usize, part: u8, expected: &'static str, actual: String},
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::Usage | RunError::BadArgument {..} | RunError::UnknownDay(_) => 1,
            RunError::Read {..} => 2,
            RunError::ExampleMismatch {..} => 3,
        }
    }
}

#[derive(Debug, PartialEq)]
struct Args {day: usize, part: u8, path: PathBuf}

fn parse_args(args: &[String]) -> Result<Args, RunError> {
    let (day_arg, part_arg, path) = match args {
        [_, day_arg, part_arg] => (day_arg, part_arg, None),
        [_, day_arg, part_arg, path] => (day_arg, part_arg, Some(PathBuf::from(path))),
        _ => return Err(RunError::Usage)
    };
    let day: usize = day_arg.parse().map_err(|_| RunError::BadArgument {name: "day", value: day_arg.clone()})?;
    if !(1 ..= DAYS.len()).contains(&day) {return Err(RunError::UnknownDay(day))}
    let part = match part_arg.as_str() {
        "1" => 1, "2" => 2,
        _ => return Err(RunError::BadArgument {name: "part", value: part_arg.clone()})
    };
    let path = path.unwrap_or_else(|| PathBuf::from(format!("day{}.in", day)));
    Ok(Args {day, part, path})
}

/// Runs the built-in examples for one puzzle part; real input is only trusted once these pass.
fn check_examples(day: usize, part: u8) -> Result<(), RunError> {
    let (solve, examples) = DAYS[day - 1];
    for (ix, example) in examples.iter().enumerate().filter(|(_, example)| example.part == part) {
        let actual = solve(part, example.input);
        if actual != example.expected {
            return Err(RunError::ExampleMismatch {day, part, expected: example.expected, actual});
        }
        log::debug!("day {} part {} example {} ok", day, part, ix);
    }
    Ok(())
}

fn run(args: &[String]) -> Result<String, RunError> {
    let Args {day, part, path} = parse_args(args)?;
    check_examples(day, part)?;
    log::info!("reading {}", path.display());
    let input = std::fs::read_to_string(&path).map_err(|source| RunError::Read {path, source})?;
    let time = std::time::Instant::now();
    let answer = (DAYS[day - 1].0)(part, &input);
    log::info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(answer)
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_module(
            "aoc2023",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .parse_default_env()
        .init();

    match run(&std::env::args().collect::<Vec<_>>()) {
        Ok(answer) => {
            println!("{}", answer);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(args: &[&str]) -> Vec<String> {
        std::iter::once("aoc2023").chain(args.iter().copied()).map(String::from).collect()
    }

    #[test]
    fn every_example_passes() {
        for (ix, (solve, examples)) in DAYS.iter().enumerate() {
            assert!(examples.iter().any(|example| example.part == 1), "day {} lacks a part 1 example", ix + 1);
            assert!(examples.iter().any(|example| example.part == 2), "day {} lacks a part 2 example", ix + 1);
            for example in examples.iter() {
                assert_eq!(solve(example.part, example.input), example.expected,
                           "day {} part {}", ix + 1, example.part);
            }
        }
    }

    #[test]
    fn default_input_path() {
        assert_eq!(parse_args(&args(&["7", "2"])).unwrap(), Args {day: 7, part: 2, path: "day7.in".into()});
        assert_eq!(parse_args(&args(&["3", "1", "x.txt"])).unwrap(), Args {day: 3, part: 1, path: "x.txt".into()});
    }

    #[test]
    fn bad_arguments_exit_with_one() {
        let bad_args: [&[&str]; 7] = [&[], &["1"], &["1", "2", "3", "4"], &["one", "1"], &["1", "3"], &["0", "1"], &["12", "1"]];
        for bad in bad_args {
            let err = parse_args(&args(bad)).unwrap_err();
            assert_eq!(err.exit_code(), 1, "{:?} gave {}", bad, err);
        }
    }

    #[test]
    fn missing_file_exits_with_two() {
        let err = run(&args(&["1", "1", "/nonexistent/day1.in"])).unwrap_err();
        assert!(matches!(err, RunError::Read {..}));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn solves_input_file() {
        let path = std::env::temp_dir().join(format!("aoc2023-day9-{}.in", std::process::id()));
        std::fs::write(&path, "0 3 6 9 12 15\n").unwrap();
        let answer = run(&args(&["9", "2", path.to_str().unwrap()]));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(answer.unwrap(), "-3");
    }
}
