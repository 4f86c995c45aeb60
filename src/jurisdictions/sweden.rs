//! Sweden: momsregistreringsnummer.
//!
//! Ten-digit organisation number followed by `01`. The tenth digit is a
//! Luhn check over the first nine.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::checksum::{check_digit, digital_root_sum, digits, mod10_complement};
use crate::core::pattern;
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

static PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| pattern::compile(r"^[0-9]{10}01$"));

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("SE")));

/// Swedish Momsnr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweden;

impl Scheme for Sweden {
    fn abbreviation(&self) -> &'static str {
        "Momsnr."
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        if !pattern::is_match(&PATTERN, clean) {
            return false;
        }
        let Some(d) = clean.get(..9).and_then(digits::<9>) else {
            return false;
        };
        check_digit(clean, 3, 1) == Some(mod10_complement(digital_root_sum(&d, &MULTIPLIERS)))
    }
}
