use log::{debug, info};
use rand::Rng;

use crate::alphabet::{self, Alphabet, Selection};
use crate::config::Request;
use crate::error::{Error, Result};
use crate::password;
use crate::strength::{self, Report};

/// Results of one successful generation. Replaced as a whole by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub alphabet: Alphabet,
    pub batch:    Vec<String>,
    pub report:   Report,
}

/// Holds the latest batch and report of a session.
///
/// Starts idle (`None`) and shows an outcome after the first successful
/// generation. A failed attempt leaves whatever was displayed before in place.
#[derive(Debug, Default)]
pub struct Generator {
    displayed: Option<Outcome>,
}

impl Generator {
    pub fn new() -> Self {
        Generator::default()
    }

    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        selection: &Selection,
        request: &Request,
        rng: &mut R,
    ) -> Result<&Outcome> {
        let alphabet = alphabet::build(selection);
        if alphabet.is_empty() {
            debug!("refusing to generate from an empty alphabet");
            return Err(Error::EmptyAlphabet);
        }

        let batch = password::generate_batch(&alphabet, request.length, request.count, rng);
        let report = strength::evaluate(alphabet.len(), request.length)?;
        info!(
            "generated {} passwords of length {} from {} chars, requirements met: {}",
            batch.len(),
            request.length,
            alphabet.len(),
            report.meets_requirements,
        );

        Ok(&*self.displayed.insert(Outcome { alphabet, batch, report }))
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.displayed.as_ref()
    }

    /// 1-based lookup into the current batch.
    pub fn password(&self, number: usize) -> Option<&str> {
        let outcome = self.outcome()?;
        number
            .checked_sub(1)
            .and_then(|i| outcome.batch.get(i))
            .map(String::as_str)
    }
}
