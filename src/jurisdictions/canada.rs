//! Canada: Business Number (BN).

use crate::core::Scheme;
use crate::core::checksum::{digital_root_sum, digits, mod10_complement};

const MULTIPLIERS: [u32; 8] = [1, 2, 1, 2, 1, 2, 1, 2];

/// Canadian BN: nine digits, Luhn-style check digit. All zeros is reserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl Scheme for Canada {
    fn abbreviation(&self) -> &'static str {
        "BN"
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<9>(clean) else {
            return false;
        };
        if d.iter().all(|&digit| digit == 0) {
            return false;
        }
        mod10_complement(digital_root_sum(&d[..8], &MULTIPLIERS)) == d[8]
    }
}
