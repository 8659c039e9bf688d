//! IBAN sample generation and checksum validation (ISO 13616, mod-97).

use rand::Rng;
use rand::seq::IndexedRandom;

/// Countries with all-numeric BBANs, with their BBAN length.
const COUNTRIES: &[(&str, usize)] = &[
    ("AT", 16),
    ("BE", 12),
    ("DE", 18),
    ("DK", 14),
    ("ES", 20),
    ("FI", 14),
    ("HU", 24),
    ("NO", 11),
    ("PL", 24),
    ("PT", 21),
];

/// Generates a random IBAN with valid check digits, e.g. `DE89370400440532013000`.
pub fn generate_iban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let &(country, bban_len) = COUNTRIES.choose(rng).unwrap_or(&("DE", 18));

    let bban: String = (0..bban_len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();

    let check = 98 - mod97(&format!("{bban}{country}00"));
    format!("{country}{check:02}{bban}")
}

/// Returns true if `iban` is well-formed and its check digits verify.
pub fn is_valid_iban(iban: &str) -> bool {
    if iban.len() < 5 || !iban.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        return false;
    }

    let (head, bban) = iban.split_at(4);
    if !head[..2].chars().all(|c| c.is_ascii_uppercase())
        || !head[2..].chars().all(|c| c.is_ascii_digit())
    {
        return false;
    }

    mod97(&format!("{bban}{head}")) == 1
}

/// Remainder modulo 97 of an alphanumeric string, letters counting as
/// `A = 10` through `Z = 35`.
fn mod97(value: &str) -> u32 {
    value.chars().fold(0u32, |acc, c| match c.to_digit(36) {
        Some(n) if n >= 10 => (acc * 100 + n) % 97,
        Some(n) => (acc * 10 + n) % 97,
        None => acc,
    })
}
