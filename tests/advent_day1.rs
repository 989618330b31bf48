//! Advent of Code 2024, day 1, solved with the basic parsers

use takecomb::ParseResult::{self, Failure, Success};
use takecomb::{ParseFailure, Parser, all_of, many, map, take_include, take_until, take_while};

const TEST_INPUT: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

const PART_1_CORRECT_ANSWER: u64 = 11;
const PART_2_CORRECT_ANSWER: u64 = 31;

/// One line without its trailing newline
fn line(input: &str) -> ParseResult<&str, &str> {
    take_include('\n')
        .parse(input)
        .map(|taken| taken.trim_end_matches('\n'))
}

fn number(input: &str) -> ParseResult<&str, u64> {
    match take_while(|c: char| c.is_ascii_digit()).parse(input) {
        Success(_, taken) if taken.is_empty() => ParseResult::failure("Couldn't find number!"),
        Success(rest, taken) => match taken.parse() {
            Ok(value) => Success(rest, value),
            Err(err) => ParseResult::failure(format!("Bad number `{}`: {}", taken, err)),
        },
        Failure(message) => Failure(message),
    }
}

/// Left and right location ids of one line
fn pair(line: &str) -> ParseResult<&str, (u64, u64)> {
    let gap = take_until(|c: char| c.is_ascii_digit());
    map(all_of((number, gap, number)), |(left, _, right): (u64, &str, u64)| {
        (left, right)
    })
    .parse(line)
    .map_failure(|message| format!("Couldn't read line `{}`: {}", line, message))
}

fn lists(input: &str) -> Result<(Vec<u64>, Vec<u64>), ParseFailure> {
    let (_, lines) = many(line).parse(input).into_result()?;

    let mut left = Vec::with_capacity(lines.len());
    let mut right = Vec::with_capacity(lines.len());
    for line in lines {
        let (_, (l, r)) = pair(line).into_result()?;
        left.push(l);
        right.push(r);
    }
    Ok((left, right))
}

fn solve_part_1(input: &str) -> Result<u64, ParseFailure> {
    let (mut left, mut right) = lists(input)?;
    left.sort_unstable();
    right.sort_unstable();
    Ok(left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum())
}

fn solve_part_2(input: &str) -> Result<u64, ParseFailure> {
    let (left, right) = lists(input)?;
    Ok(left
        .iter()
        .map(|l| l * right.iter().filter(|r| *r == l).count() as u64)
        .sum())
}

#[test]
fn aoc_day_1_lines() {
    let (rest, lines) = many(line).parse(TEST_INPUT).unwrap();
    assert_eq!(rest, "");
    assert_eq!(lines, vec!["3   4", "4   3", "2   5", "1   3", "3   9", "3   3"]);
}

#[test]
fn aoc_day_1_pair() {
    assert_eq!(pair("13   42"), Success("", (13, 42)));
    assert_eq!(
        pair("x 1").failure_message(),
        Some("Couldn't read line `x 1`: AllOf failed because parser `0` failed with error: Couldn't find number!")
    );
}

#[test]
fn aoc_day_1_part_1() {
    assert_eq!(solve_part_1(TEST_INPUT), Ok(PART_1_CORRECT_ANSWER));
}

#[test]
fn aoc_day_1_part_2() {
    assert_eq!(solve_part_2(TEST_INPUT), Ok(PART_2_CORRECT_ANSWER));
}

#[test]
fn aoc_day_1_bad_line_is_reported() {
    let err = solve_part_1("3   4\nfour 4\n").unwrap_err();
    assert!(err.to_string().starts_with("Couldn't read line `four 4`"));
}
