//! Australia: Australian Business Number (ABN) and Tax File Number (TFN).
//!
//! Eleven digits are an ABN, nine digits a TFN. Neither has a separate
//! check digit; the whole number must satisfy a weighted modulus.

use std::sync::LazyLock;

use crate::core::checksum::{digits, weighted_sum};
use crate::core::{NormalizationStep, Pipeline, Scheme};

const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
const TFN_WEIGHTS: [u32; 9] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("AU")));

/// Australian ABN / TFN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Australia;

impl Australia {
    /// Subtract 1 from the leading digit, then the weighted sum must be
    /// divisible by 89. A leading zero cannot be reduced and never validates.
    fn is_valid_abn(clean: &str) -> bool {
        let Some(mut d) = digits::<11>(clean) else {
            return false;
        };
        let Some(first) = d[0].checked_sub(1) else {
            return false;
        };
        d[0] = first;
        weighted_sum(&d, &ABN_WEIGHTS) % 89 == 0
    }

    fn is_valid_tfn(clean: &str) -> bool {
        let Some(d) = digits::<9>(clean) else {
            return false;
        };
        weighted_sum(&d, &TFN_WEIGHTS) % 11 == 0
    }
}

impl Scheme for Australia {
    fn abbreviation(&self) -> &'static str {
        "ABN"
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        match clean.len() {
            11 => Self::is_valid_abn(clean),
            9 => Self::is_valid_tfn(clean),
            _ => false,
        }
    }
}
