//! Luxembourg: numéro d'identification à la TVA.

use crate::core::Scheme;
use crate::core::checksum::{check_digit, digits};

/// Luxembourg TVA: eight digits, the last two are the first six mod 89.
#[derive(Debug, Clone, Copy, Default)]
pub struct Luxembourg;

impl Scheme for Luxembourg {
    fn abbreviation(&self) -> &'static str {
        "TVA"
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<8>(clean) else {
            return false;
        };
        let payload = d[..6].iter().fold(0, |acc, digit| acc * 10 + digit);
        check_digit(clean, 2, 2) == Some(payload % 89)
    }
}
