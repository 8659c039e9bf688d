//! Fake sample data generation per category.
//!
//! Each [`Category`] maps to one [`SampleFn`] drawing a single random value
//! from the `fake` crate (or the IBAN builder for `MECARD`). Uniqueness is
//! not handled here; see [`crate::application::services::BatchGenerator`].

use fake::Fake;
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::rngs::StdRng;

use crate::domain::entities::Category;
use crate::utils::iban::generate_iban;

/// Maximum length of an SMS sample, in characters.
pub const SMS_MAX_CHARS: usize = 100;

/// Draws one sample value from the given RNG.
pub type SampleFn = fn(&mut StdRng) -> String;

/// Returns the sample generator for a category.
pub fn sampler(category: Category) -> SampleFn {
    match category {
        Category::WebsiteUrl => website_url,
        Category::Email => email,
        Category::PhoneNumber => phone_number,
        Category::Sms => sms_text,
        Category::MeCard => generate_iban,
    }
}

/// A lowercase domain name such as `dolorem.com` or `magni-quia.net`.
pub fn website_url(rng: &mut StdRng) -> String {
    let first: String = Word().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);

    let label = if rng.random_bool(0.5) {
        let second: String = Word().fake_with_rng(rng);
        format!("{first}-{second}")
    } else {
        first
    };

    format!("{label}.{suffix}").to_lowercase()
}

pub fn email(rng: &mut StdRng) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn phone_number(rng: &mut StdRng) -> String {
    PhoneNumber().fake_with_rng(rng)
}

/// A free-text sentence capped at [`SMS_MAX_CHARS`] characters.
pub fn sms_text(rng: &mut StdRng) -> String {
    let sentence: String = Sentence(4..12).fake_with_rng(rng);
    sentence.chars().take(SMS_MAX_CHARS).collect()
}
