//! The closed set of supported jurisdictions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::VatError;
use super::normalize::{DEFAULT_PIPELINE, Pipeline};
use crate::jurisdictions::{
    Australia, Austria, Canada, Germany, Italy, Luxembourg, Malta, Netherlands, Norway, Poland,
    Portugal, Romania, Slovenia, Spain, Sweden,
};

/// The per-jurisdiction checksum strategy.
///
/// Implementations are stateless; all parameter tables are constants.
pub trait Scheme: Send + Sync {
    /// Local label for the identifier, e.g. `USt-IdNr.`.
    fn abbreviation(&self) -> &'static str;

    /// The pipeline that turns raw input into a clean number.
    fn pipeline(&self) -> &'static Pipeline {
        &DEFAULT_PIPELINE
    }

    /// Structural and checksum validation of an already cleaned number.
    fn is_valid(&self, clean: &str) -> bool;
}

/// A country or region with its own tax identifier rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "AT")]
    Austria,
    #[serde(rename = "AU")]
    Australia,
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "DE")]
    Germany,
    #[serde(rename = "ES")]
    Spain,
    #[serde(rename = "IT")]
    Italy,
    #[serde(rename = "LU")]
    Luxembourg,
    #[serde(rename = "MT")]
    Malta,
    #[serde(rename = "NL")]
    Netherlands,
    #[serde(rename = "NO")]
    Norway,
    #[serde(rename = "PL")]
    Poland,
    #[serde(rename = "PT")]
    Portugal,
    #[serde(rename = "RO")]
    Romania,
    #[serde(rename = "SE")]
    Sweden,
    #[serde(rename = "SI")]
    Slovenia,
}

impl Jurisdiction {
    /// Every supported jurisdiction, ordered by country code.
    pub const ALL: [Jurisdiction; 15] = [
        Self::Austria,
        Self::Australia,
        Self::Canada,
        Self::Germany,
        Self::Spain,
        Self::Italy,
        Self::Luxembourg,
        Self::Malta,
        Self::Netherlands,
        Self::Norway,
        Self::Poland,
        Self::Portugal,
        Self::Romania,
        Self::Sweden,
        Self::Slovenia,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Austria => "AT",
            Self::Australia => "AU",
            Self::Canada => "CA",
            Self::Germany => "DE",
            Self::Spain => "ES",
            Self::Italy => "IT",
            Self::Luxembourg => "LU",
            Self::Malta => "MT",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::Poland => "PL",
            Self::Portugal => "PT",
            Self::Romania => "RO",
            Self::Sweden => "SE",
            Self::Slovenia => "SI",
        }
    }

    /// English country name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Austria => "Austria",
            Self::Australia => "Australia",
            Self::Canada => "Canada",
            Self::Germany => "Germany",
            Self::Spain => "Spain",
            Self::Italy => "Italy",
            Self::Luxembourg => "Luxembourg",
            Self::Malta => "Malta",
            Self::Netherlands => "Netherlands",
            Self::Norway => "Norway",
            Self::Poland => "Poland",
            Self::Portugal => "Portugal",
            Self::Romania => "Romania",
            Self::Sweden => "Sweden",
            Self::Slovenia => "Slovenia",
        }
    }

    /// Look up a jurisdiction by its two-letter code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|j| j.code().eq_ignore_ascii_case(code))
    }

    pub(crate) fn scheme(self) -> &'static dyn Scheme {
        match self {
            Self::Austria => &Austria,
            Self::Australia => &Australia,
            Self::Canada => &Canada,
            Self::Germany => &Germany,
            Self::Spain => &Spain,
            Self::Italy => &Italy,
            Self::Luxembourg => &Luxembourg,
            Self::Malta => &Malta,
            Self::Netherlands => &Netherlands,
            Self::Norway => &Norway,
            Self::Poland => &Poland,
            Self::Portugal => &Portugal,
            Self::Romania => &Romania,
            Self::Sweden => &Sweden,
            Self::Slovenia => &Slovenia,
        }
    }

    /// Local label for the identifier, e.g. `P.IVA` for Italy.
    pub fn abbreviation(self) -> &'static str {
        self.scheme().abbreviation()
    }

    /// The normalization pipeline used for this jurisdiction.
    pub fn pipeline(self) -> &'static Pipeline {
        self.scheme().pipeline()
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| VatError::UnknownCountry(s.to_string()))
    }
}
