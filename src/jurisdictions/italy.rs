//! Italy: Partita IVA.
//!
//! Eleven digits. Before the checksum runs, a [`RuleSet`] requires the
//! number to be numeric, of the right length, not to start with six zeros
//! and to carry a known tax office code at positions 8 to 10.

use std::sync::LazyLock;

use crate::core::checksum::{digital_root_sum, digits, mod10_complement};
use crate::core::rules::{ContainsTaxOffice, IsNumeric, LengthEquals, NotStartsWith};
use crate::core::{NormalizationStep, Pipeline, RuleSet, Scheme};

const MULTIPLIERS: [u32; 10] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2];

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("IT")));

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .with(IsNumeric)
        .with(LengthEquals(11))
        .with(NotStartsWith("000000".into()))
        .with(ContainsTaxOffice)
});

/// Italian P.IVA.
#[derive(Debug, Clone, Copy, Default)]
pub struct Italy;

impl Scheme for Italy {
    fn abbreviation(&self) -> &'static str {
        "P.IVA"
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        if !RULES.valid(clean) {
            return false;
        }
        let Some(d) = digits::<11>(clean) else {
            return false;
        };
        mod10_complement(digital_root_sum(&d[..10], &MULTIPLIERS)) == d[10]
    }
}
