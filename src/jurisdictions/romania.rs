//! Romania: Cod de Identificare Fiscală (CIF).
//!
//! Two to ten digits. The number is left-padded with zeros to ten digits
//! for the checksum only; the clean number keeps its issued length.

use std::sync::LazyLock;

use crate::core::checksum::{digits, weighted_sum};
use crate::core::{NormalizationStep, Pipeline, Scheme};

const MULTIPLIERS: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("RO")));

/// Romanian CIF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Romania;

impl Scheme for Romania {
    fn abbreviation(&self) -> &'static str {
        "CIF"
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        if !(2..=10).contains(&clean.len()) {
            return false;
        }
        let padded = NormalizationStep::zero_pad(10).apply(clean);
        let Some(d) = digits::<10>(&padded) else {
            return false;
        };
        let check = match weighted_sum(&d[..9], &MULTIPLIERS) * 10 % 11 {
            10 => 0,
            check => check,
        };
        check == d[9]
    }
}
