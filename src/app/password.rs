//! Random password generator.
//!
//! The alphabet always holds the 52 Latin letters, optionally followed by
//! the ten digits and the symbol set `!@#$%^&*`. Characters are drawn
//! independently and uniformly, with replacement.

use rand::RngExt;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

/// Build the candidate alphabet for the given options.
pub fn alphabet(use_numbers: bool, use_symbols: bool) -> Vec<char> {
    let mut chars: Vec<char> = LETTERS.chars().collect();
    if use_numbers {
        chars.extend(DIGITS.chars());
    }
    if use_symbols {
        chars.extend(SYMBOLS.chars());
    }
    chars
}

/// Generate a `length`-character password. A length of 0 yields `""`.
///
/// Callers pass the generator; the app uses `rand::rng()`, which is
/// cryptographically secure.
pub fn generate_password<R: RngExt>(
    rng: &mut R,
    length: usize,
    use_numbers: bool,
    use_symbols: bool,
) -> String {
    let chars = alphabet(use_numbers, use_symbols);
    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}
