//! Norway: organisasjonsnummer.
//!
//! Nine digits, weighted mod 11. A remainder of 1 would need a check
//! digit of 10; such numbers are never issued and never validate. The
//! `MVA` suffix marking VAT registration is stripped during cleaning.

use std::sync::LazyLock;

use crate::core::checksum::{check_matches, digits, weighted_sum};
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_suffix("MVA")));

/// Norwegian Orgnr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Norway;

impl Scheme for Norway {
    fn abbreviation(&self) -> &'static str {
        "Orgnr"
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<9>(clean) else {
            return false;
        };
        let expected = match weighted_sum(&d[..8], &MULTIPLIERS) % 11 {
            0 => Some(0),
            1 => None,
            remainder => Some(11 - remainder),
        };
        check_matches(expected, Some(d[8]))
    }
}
