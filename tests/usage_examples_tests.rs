// Copyright 2025 Cowboy AI, LLC.

//! Scenario tests: the same lookups and validations written against
//! `Maybe` and `Either` instead of sentinel checks.

use cim_fp::{failure, find, maybe, success, Either, Fallback};

use pretty_assertions::assert_eq;
use test_case::test_case;

struct Country {
    name: &'static str,
    code: u32,
}

const COUNTRIES: [Country; 2] = [
    Country {
        name: "United States",
        code: 1,
    },
    Country {
        name: "United Kingdom",
        code: 44,
    },
];

fn find_country_name(code: u32) -> &'static str {
    find(&COUNTRIES, |c| c.code == code)
        .map(|c| c.name)
        .get_or_else("Not found")
}

#[test_case(1, "United States" ; "united states by code 1")]
#[test_case(44, "United Kingdom" ; "united kingdom by code 44")]
#[test_case(7, "Not found" ; "unknown code")]
fn country_lookup(code: u32, expected: &str) {
    assert_eq!(find_country_name(code), expected);
}

fn try_parse_int(input: &str) -> Either<String, i64> {
    let parsed = input.parse::<i64>();
    Either::cond(parsed.is_ok(), parsed.unwrap_or_default(), "not a number".to_string())
}

#[test_case("42", success(42) ; "digits parse")]
#[test_case("-7", success(-7) ; "negative digits parse")]
#[test_case("not a number", failure("not a number".to_string()) ; "text fails")]
fn input_parser(input: &str, expected: Either<String, i64>) {
    assert_eq!(try_parse_int(input), expected);
}

const AGE_MIN: i64 = 14;
const AGE_MAX: i64 = 30;

fn validate_age(input: &str) -> Either<String, i64> {
    maybe(input.parse::<i64>().ok())
        .fold(
            || failure("Invalid input, the age should be a number.".to_string()),
            success,
        )
        .filter_or_else(
            |age| (AGE_MIN..=AGE_MAX).contains(age),
            Fallback::lazy(|| {
                format!("The age should be in range between {AGE_MIN} and {AGE_MAX}.")
            }),
        )
}

#[test_case("20", success(20) ; "valid age")]
#[test_case("WAT", failure("Invalid input, the age should be a number.".to_string()) ; "not a number")]
#[test_case("10", failure("The age should be in range between 14 and 30.".to_string()) ; "too young")]
#[test_case("31", failure("The age should be in range between 14 and 30.".to_string()) ; "too old")]
fn input_validation(input: &str, expected: Either<String, i64>) {
    assert_eq!(validate_age(input), expected);
}

#[test]
fn chained_lookup_falls_back_through_or_else() {
    let primary = find(&COUNTRIES, |c| c.code == 999).map(|c| c.name);
    let secondary = find(&COUNTRIES, |c| c.code == 44).map(|c| c.name);

    assert_eq!(primary.or_else(secondary).get_or_else("Not found"), "United Kingdom");
}

#[test]
fn results_collect_through_iteration() {
    let inputs = ["1", "x", "3", "y"];
    let parsed: Vec<i64> = inputs.iter().flat_map(|s| try_parse_int(s)).collect();
    let errors: Vec<String> = inputs
        .iter()
        .flat_map(|s| try_parse_int(s).swap())
        .collect();

    assert_eq!(parsed, vec![1, 3]);
    assert_eq!(errors, vec!["not a number".to_string(); 2]);
}
