//! Germany: Umsatzsteuer-Identifikationsnummer (USt-IdNr.).
//!
//! Nine digits, no leading zero. The check digit follows ISO 7064
//! MOD 11,10: a running product is carried through the first eight digits
//! and the check digit is `11 - product`, with 10 mapped to 0.

use std::sync::LazyLock;

use crate::core::checksum::digits;
use crate::core::{NormalizationStep, Pipeline, Scheme};

static PIPELINE: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::default().then(NormalizationStep::strip_prefix("DE")));

/// German USt-IdNr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl Scheme for Germany {
    fn abbreviation(&self) -> &'static str {
        "USt-IdNr."
    }

    fn pipeline(&self) -> &'static Pipeline {
        &PIPELINE
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<9>(clean) else {
            return false;
        };
        if d[0] == 0 {
            return false;
        }

        let product = d[..8].iter().fold(10, |product, &digit| {
            let sum = match (digit + product) % 10 {
                0 => 10,
                sum => sum,
            };
            (2 * sum) % 11
        });
        let check = match 11 - product {
            10 => 0,
            check => check,
        };
        check == d[8]
    }
}
