//! Austria: Umsatzsteuer-Identifikationsnummer (UID).
//!
//! `U` followed by eight digits. The last digit is checked against the
//! digital roots of the first seven, weighted 1-2-1-2-1-2-1:
//! `check = (96 - sum) mod 10`.

use crate::core::Scheme;
use crate::core::checksum::{digital_root_sum, digits};

const MULTIPLIERS: [u32; 7] = [1, 2, 1, 2, 1, 2, 1];

/// Austrian UID.
#[derive(Debug, Clone, Copy, Default)]
pub struct Austria;

impl Scheme for Austria {
    fn abbreviation(&self) -> &'static str {
        "UID"
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(body) = clean.strip_prefix('U') else {
            return false;
        };
        let Some(d) = digits::<8>(body) else {
            return false;
        };
        let sum = digital_root_sum(&d[..7], &MULTIPLIERS);
        (96 - sum) % 10 == d[7]
    }
}
