use std::fmt;
use std::ops::Range;

use failure::Fail;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use sequences::{last_min_window, min_window, next_greater_in_place, Window};

#[derive(Debug, Fail, PartialEq)]
pub(crate) enum InputError {
    #[fail(display = "No integers found in {:?}", _0)]
    NoNumbers(String),

    #[fail(display = "Invalid integer: {}", _0)]
    InvalidNumber(String),
}

/// A sequence given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sequence {
    Chars(Vec<char>),
    Numbers(Vec<i64>),
}

impl Sequence {
    pub(crate) fn parse(s: &str, numbers: bool) -> Result<Self, InputError> {
        if numbers {
            Self::numbers(s)
        } else {
            Ok(Sequence::Chars(s.chars().collect()))
        }
    }

    fn numbers(s: &str) -> Result<Self, InputError> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"-?\d+").unwrap();
        };

        let numbers = RE
            .find_iter(s)
            .map(|m| {
                m.as_str()
                    .parse::<i64>()
                    .map_err(|_| InputError::InvalidNumber(m.as_str().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if numbers.is_empty() && !s.trim().is_empty() {
            return Err(InputError::NoNumbers(s.to_string()));
        }
        Ok(Sequence::Numbers(numbers))
    }

    pub(crate) fn min_window(&self, last: bool) -> Window {
        match (self, last) {
            (Sequence::Chars(c), false) => min_window(c),
            (Sequence::Chars(c), true) => last_min_window(c),
            (Sequence::Numbers(n), false) => min_window(n),
            (Sequence::Numbers(n), true) => last_min_window(n),
        }
    }

    pub(crate) fn next_greater(&mut self) -> bool {
        match self {
            Sequence::Chars(c) => next_greater_in_place(c),
            Sequence::Numbers(n) => next_greater_in_place(n),
        }
    }

    /// The part of this sequence covered by `range`.
    pub(crate) fn excerpt(&self, range: Range<usize>) -> Self {
        match self {
            Sequence::Chars(c) => Sequence::Chars(c[range].to_vec()),
            Sequence::Numbers(n) => Sequence::Numbers(n[range].to_vec()),
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sequence::Chars(c) => write!(f, "{}", c.iter().collect::<String>()),
            Sequence::Numbers(n) => write!(f, "{}", n.iter().join(", ")),
        }
    }
}
