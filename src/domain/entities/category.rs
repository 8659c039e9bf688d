//! Sample data categories offered by the generator form.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kind of fake data encoded into each QR code of a batch.
///
/// The wire keys (`WEBSITE_URL`, `E-MAIL`, ...) are the values submitted by
/// the form's `prefix` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    WebsiteUrl,
    Email,
    PhoneNumber,
    Sms,
    /// Named after the MeCard contact format, but samples are bank account
    /// numbers (IBAN).
    MeCard,
}

/// Returned when a string is not one of the known category keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in form display order.
    pub const ALL: [Category; 5] = [
        Category::WebsiteUrl,
        Category::Email,
        Category::PhoneNumber,
        Category::Sms,
        Category::MeCard,
    ];

    /// Form key of the category.
    pub fn key(self) -> &'static str {
        match self {
            Category::WebsiteUrl => "WEBSITE_URL",
            Category::Email => "E-MAIL",
            Category::PhoneNumber => "PHONE_NUMBER",
            Category::Sms => "SMS",
            Category::MeCard => "MECARD",
        }
    }

    /// Human readable label shown in the form's select box.
    pub fn label(self) -> &'static str {
        match self {
            Category::WebsiteUrl => "Website URL (http://)",
            Category::Email => "E-mail Address (mailto:)",
            Category::PhoneNumber => "Phone Number (tel:)",
            Category::Sms => "Text (SMS) (sms:)",
            Category::MeCard => "MeCard (mecard:)",
        }
    }

    /// Text actually encoded into the QR code for a sample.
    ///
    /// Phone numbers are encoded as `tel:` URIs so scanners offer to dial;
    /// every other category encodes the sample verbatim.
    pub fn qr_payload(self, data: &str) -> Cow<'_, str> {
        match self {
            Category::PhoneNumber => Cow::Owned(format!("tel:{data}")),
            _ => Cow::Borrowed(data),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
