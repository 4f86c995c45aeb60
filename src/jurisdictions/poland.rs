//! Poland: Numer Identyfikacji Podatkowej (NIP).

use crate::core::Scheme;
use crate::core::checksum::{check_matches, digits, weighted_sum};

const MULTIPLIERS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Polish NIP: ten digits, the last is the weighted sum of the first nine
/// mod 11. A remainder of 10 has no valid check digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Poland;

impl Scheme for Poland {
    fn abbreviation(&self) -> &'static str {
        "NIP"
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<10>(clean) else {
            return false;
        };
        let expected = match weighted_sum(&d[..9], &MULTIPLIERS) % 11 {
            10 => None,
            remainder => Some(remainder),
        };
        check_matches(expected, Some(d[9]))
    }
}
