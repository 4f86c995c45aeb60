//! The [`VatNumber`] value: a raw identifier bound to its jurisdiction,
//! with the clean number and the validation entry points.

use std::fmt;

use serde::Serialize;

use super::checksum;
use super::error::VatError;
use super::format::{DEFAULT_TEMPLATE, render};
use super::jurisdiction::Jurisdiction;

/// A tax identifier bound to its jurisdiction.
///
/// The clean number is computed once, at construction, with the
/// jurisdiction's normalization pipeline. The value is immutable afterwards,
/// so [`validate`](Self::validate) can be called any number of times and from
/// any thread.
///
/// ```
/// use vatcheck::{Jurisdiction, VatNumber};
///
/// let vat = VatNumber::new(Jurisdiction::Austria, "ATU 1234 5675");
/// assert!(vat.validate());
/// assert_eq!(vat.number(), "ATU 1234 5675");
/// assert_eq!(vat.clean_number(), "U12345675");
/// assert_eq!(vat.format("a c n"), "UID AT U12345675");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VatNumber {
    jurisdiction: Jurisdiction,
    number: String,
    clean: String,
}

impl VatNumber {
    /// Bind `number` to `jurisdiction`. Never fails; malformed input simply
    /// does not validate.
    pub fn new(jurisdiction: Jurisdiction, number: impl Into<String>) -> Self {
        let number = number.into();
        let clean = jurisdiction.pipeline().normalize(&number);
        Self {
            jurisdiction,
            number,
            clean,
        }
    }

    /// Build from an ID that starts with its 2-letter country code,
    /// e.g. `"DE 136 695 976"`.
    ///
    /// The whole input, prefix included, is kept as the raw number; the
    /// jurisdiction's pipeline removes the prefix.
    pub fn parse(input: &str) -> Result<Self, VatError> {
        let trimmed = input.trim();
        if trimmed.chars().count() <= 2 {
            return Err(VatError::TooShort(trimmed.to_string()));
        }
        let prefix: String = trimmed.chars().take(2).collect();
        let Some(jurisdiction) = Jurisdiction::from_code(&prefix) else {
            return Err(VatError::UnknownCountry(prefix));
        };
        Ok(Self::new(jurisdiction, input))
    }

    /// Whether the clean number passes the jurisdiction's structural and
    /// checksum rules.
    pub fn validate(&self) -> bool {
        let valid = self.jurisdiction.scheme().is_valid(&self.clean);
        tracing::trace!(country = self.country(), valid, "validated tax identifier");
        valid
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// ISO 3166-1 alpha-2 code of the jurisdiction.
    pub fn country(&self) -> &'static str {
        self.jurisdiction.code()
    }

    /// Local label for the identifier type.
    pub fn abbreviation(&self) -> &'static str {
        self.jurisdiction.abbreviation()
    }

    /// The input exactly as passed to the constructor.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The normalized number every rule is evaluated against.
    pub fn clean_number(&self) -> &str {
        &self.clean
    }

    /// Render with a template; see [`render`](super::render) for placeholders.
    pub fn format(&self, template: &str) -> String {
        render(template, self.country(), &self.clean, self.abbreviation())
    }

    /// Integer check value of `size` digits, `offset` characters from the end.
    pub fn check_digit(&self, offset: usize, size: usize) -> Option<u32> {
        checksum::check_digit(&self.clean, offset, size)
    }

    /// Check character `offset` characters from the end.
    pub fn check_char(&self, offset: usize) -> Option<char> {
        checksum::check_char(&self.clean, offset)
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_TEMPLATE))
    }
}

/// Validate `number` for `jurisdiction` in one call.
pub fn is_valid(jurisdiction: Jurisdiction, number: &str) -> bool {
    VatNumber::new(jurisdiction, number).validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_raw_number() {
        let vat = VatNumber::new(Jurisdiction::Poland, " PL 123-456-32-18 ");
        assert_eq!(vat.number(), " PL 123-456-32-18 ");
        assert_eq!(vat.clean_number(), "1234563218");
        assert!(vat.validate());
    }

    #[test]
    fn parse_detects_jurisdiction() {
        let vat = VatNumber::parse("de136695976").unwrap();
        assert_eq!(vat.jurisdiction(), Jurisdiction::Germany);
        assert_eq!(vat.number(), "de136695976");
        assert!(vat.validate());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            VatNumber::parse(" DE "),
            Err(VatError::TooShort("DE".into()))
        );
        assert_eq!(VatNumber::parse("ü"), Err(VatError::TooShort("ü".into())));
        assert_eq!(
            VatNumber::parse("XX123456789"),
            Err(VatError::UnknownCountry("XX".into()))
        );
    }

    #[test]
    fn parse_prefix_is_two_characters() {
        assert_eq!(
            VatNumber::parse("aü123456789"),
            Err(VatError::UnknownCountry("aü".into()))
        );
        assert_eq!(
            VatNumber::parse("ßé1"),
            Err(VatError::UnknownCountry("ßé".into()))
        );
        assert_eq!(VatNumber::parse("üü"), Err(VatError::TooShort("üü".into())));
    }

    #[test]
    fn check_helpers_read_clean_number() {
        let vat = VatNumber::new(Jurisdiction::Spain, "ES X-1234567-L");
        assert_eq!(vat.check_char(1), Some('L'));
        assert_eq!(vat.check_digit(2, 1), Some(7));
    }

    #[test]
    fn display_uses_default_template() {
        let vat = VatNumber::new(Jurisdiction::Sweden, "5561888404 01");
        assert_eq!(vat.to_string(), "SE556188840401");
    }
}
