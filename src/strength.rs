use crate::error::{Error, Result};

/// Passwords the attacker tries per day.
pub const ATTACK_RATE: f64 = 100.0;
/// Days a password stays in use.
pub const LIFETIME_DAYS: f64 = 10.0;
/// Highest acceptable chance of the password being guessed within its lifetime.
pub const REQUIRED_PROBABILITY: f64 = 1e-7;

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub alphabet_size:        usize,
    pub password_length:      usize,
    pub total_combinations:   f64,
    pub actual_probability:   f64,
    pub required_probability: f64,
    pub meets_requirements:   bool,
}

/// Brute-force resistance of passwords of `password_length` characters drawn
/// from an alphabet of `alphabet_size`.
///
/// The keyspace is computed in floating point. When it overflows to infinity
/// the crack probability becomes zero and the requirement is met.
pub fn evaluate(alphabet_size: usize, password_length: usize) -> Result<Report> {
    if alphabet_size == 0 {
        return Err(Error::EmptyAlphabet);
    }

    let total_combinations = match i32::try_from(password_length) {
        Ok(n) => (alphabet_size as f64).powi(n),
        Err(_) => f64::INFINITY,
    };
    let actual_probability = (ATTACK_RATE * LIFETIME_DAYS) / total_combinations;

    Ok(Report {
        alphabet_size,
        password_length,
        total_combinations,
        actual_probability,
        required_probability: REQUIRED_PROBABILITY,
        meets_requirements: actual_probability <= REQUIRED_PROBABILITY,
    })
}
