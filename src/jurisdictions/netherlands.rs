//! Netherlands: btw-identificatienummer.
//!
//! Nine digits, the letter `B` and a two-digit suffix. Short inputs are
//! left-padded with zeros to twelve characters after cleaning. The ninth
//! digit (fourth from the end) is the weighted sum of the first eight
//! mod 11, where a remainder of 10 maps to 0.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::checksum::{check_digit, digits, weighted_sum};
use crate::core::pattern;
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

static PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern::compile(r"^[0-9]{9}B[0-9]{2}$"));

static PIPELINE: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::default()
        .then(NormalizationStep::strip_prefix("NL"))
        .then(NormalizationStep::zero_pad(12))
});

/// Dutch btw-nummer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Netherlands;

impl Scheme for Netherlands {
    fn abbreviation(&self) -> &'static str {
        "Btw-nr."
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        if !pattern::is_match(&PATTERN, clean) {
            return false;
        }
        let Some(d) = clean.get(..8).and_then(digits::<8>) else {
            return false;
        };
        let check = match weighted_sum(&d, &MULTIPLIERS) % 11 {
            10 => 0,
            remainder => remainder,
        };
        check_digit(clean, 4, 1) == Some(check)
    }
}
