//! Malta: VAT number.

use std::sync::LazyLock;

use crate::core::checksum::{check_digit, digits, weighted_sum};
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 6] = [3, 4, 6, 7, 8, 9];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("MT")));

/// Maltese VAT number: eight digits, no leading zero, with a two-digit
/// check value `37 - (weighted sum mod 37)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Malta;

impl Scheme for Malta {
    fn abbreviation(&self) -> &'static str {
        "Vat No."
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
        let check = 37 - weighted_sum(&d[..6], &MULTIPLIERS) % 37;
        check_digit(clean, 2, 2) == Some(check)
    }
}
