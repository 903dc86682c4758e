use rand::Rng;

use crate::alphabet::Alphabet;

/// Draws `length` characters uniformly from `alphabet`, with replacement.
/// Not a cryptographic generator: the strength of the result is only as good as `rng`.
pub fn generate<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    let chars = alphabet.chars();
    if chars.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

pub fn generate_batch<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count).map(|_| generate(alphabet, length, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{self, Selection};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn passwords_use_only_alphabet_chars() {
        let mut rng = StdRng::seed_from_u64(12);
        for selection in [Selection::default(), Selection::all(), Selection {
            digits: true,
            ..Selection::none()
        }] {
            let alphabet = alphabet::build(&selection);
            for length in [4, 6, 14, 20] {
                let batch = generate_batch(&alphabet, length, 25, &mut rng);
                assert_eq!(batch.len(), 25);
                for password in &batch {
                    if password.chars().count() != length {
                        panic!("password {:?} not {} chars", password, length)
                    }
                    assert!(password.chars().all(|c| alphabet.contains(c)));
                }
            }
        }
    }

    #[test]
    fn repeats_are_allowed() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = alphabet::build(&Selection { digits: true, ..Selection::none() });
        // 20 draws from 10 digits must repeat
        let password = generate(&alphabet, 20, &mut rng);
        assert_eq!(password.len(), 20);
        let unique: std::collections::HashSet<char> = password.chars().collect();
        assert!(unique.len() <= 10);
    }

    #[test]
    fn every_char_is_reachable() {
        let mut rng = StdRng::seed_from_u64(99);
        let alphabet = alphabet::build(&Selection { symbols: true, ..Selection::none() });
        let drawn: String = generate_batch(&alphabet, 20, 20, &mut rng).concat();
        for c in alphabet.chars() {
            assert!(drawn.contains(*c), "{} never drawn", c);
        }
    }

    #[test]
    fn consecutive_batches_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let alphabet = alphabet::build(&Selection::default());
        let first = generate_batch(&alphabet, 12, 5, &mut rng);
        let second = generate_batch(&alphabet, 12, 5, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn empty_alphabet_gives_empty_password() {
        let mut rng = StdRng::seed_from_u64(0);
        let alphabet = alphabet::build(&Selection::none());
        assert_eq!(generate(&alphabet, 8, &mut rng), "");
    }
}
