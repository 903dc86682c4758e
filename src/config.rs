use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use log::warn;

use crate::alphabet::Selection;
use crate::error::{Error, Result};

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=20;
pub const COUNT_RANGE:  RangeInclusive<usize> = 1..=100;

pub const DEFAULT_LENGTH: usize = 6;
pub const DEFAULT_COUNT:  usize = 5;

/// How many passwords to draw and how long each one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub count:  usize,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            length: DEFAULT_LENGTH,
            count:  DEFAULT_COUNT,
        }
    }
}

impl Request {
    /// Builds a request with both values clamped into their allowed ranges.
    pub fn new(length: usize, count: usize) -> Self {
        Request {
            length: clamp("length", length, LENGTH_RANGE),
            count:  clamp("count", count, COUNT_RANGE),
        }
    }

    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = clamp("length", length, LENGTH_RANGE);
        self.length
    }

    pub fn set_count(&mut self, count: usize) -> usize {
        self.count = clamp("count", count, COUNT_RANGE);
        self.count
    }
}

/// Everything the user can change between generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub selection: Selection,
    pub request:   Request,
}

fn clamp(name: &str, value: usize, range: RangeInclusive<usize>) -> usize {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        warn!("{} {} out of range {:?}, using {}", name, value, range, clamped);
    }
    clamped
}

/// Parses a non-negative integer typed by the user. Values too large for
/// `usize` saturate so they get clamped like any other out-of-range value.
pub fn parse_number(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) => Ok(n),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
        Err(_) => Err(Error::InvalidNumber(trimmed.to_string())),
    }
}
