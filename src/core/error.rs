use thiserror::Error;

/// Errors returned when a prefixed VAT ID cannot be mapped to a jurisdiction.
///
/// Validation itself never fails with an error: a malformed number is
/// simply reported as invalid by [`VatNumber::validate`](super::VatNumber::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// The input is too short to hold a country prefix and a number.
    #[error("input '{0}' is too short: expected a 2-letter country prefix followed by the number")]
    TooShort(String),

    /// The prefix does not name a supported jurisdiction.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),
}
