//! Slovenia: identifikacijska številka za DDV.

use std::sync::LazyLock;

use crate::core::checksum::{check_matches, digits, weighted_sum};
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("SI")));

/// Slovenian ID za DDV: eight digits, no leading zero, mod 11 check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Slovenia;

impl Scheme for Slovenia {
    fn abbreviation(&self) -> &'static str {
        "ID za DDV"
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<8>(clean) else {
            return false;
        };
        if d[0] == 0 {
            return false;
        }
        let expected = match 11 - weighted_sum(&d[..7], &MULTIPLIERS) % 11 {
            11 => None,
            10 => Some(0),
            check => Some(check),
        };
        check_matches(expected, Some(d[7]))
    }
}
