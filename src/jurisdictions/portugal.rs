//! Portugal: Número de Identificação Fiscal (NIF).

use crate::core::Scheme;
use crate::core::checksum::{digits, weighted_sum};

const MULTIPLIERS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Leading digits assigned to individuals (1, 2) and entities (5 to 9).
const ISSUED_PREFIXES: [u32; 7] = [1, 2, 5, 6, 7, 8, 9];

/// Portuguese NIF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portugal;

impl Scheme for Portugal {
    fn abbreviation(&self) -> &'static str {
        "NIF"
    }

    fn is_valid(&self, clean: &str) -> bool {
        let Some(d) = digits::<9>(clean) else {
            return false;
        };
        if !ISSUED_PREFIXES.contains(&d[0]) {
            return false;
        }
        let check = match 11 - weighted_sum(&d[..8], &MULTIPLIERS) % 11 {
            10 | 11 => 0,
            check => check,
        };
        check == d[8]
    }
}
