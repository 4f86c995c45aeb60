//! Spain: Número de Identificación Fiscal (NIF).
//!
//! Three mutually exclusive layouts share the identifier:
//!
//! | Layout | Entity | Check |
//! |--------|--------|-------|
//! | `[A-HJUV]` + 8 digits | national legal entity | digit |
//! | `[A-HN-SW]` + 7 digits + `[A-J]` | non-national legal entity | letter |
//! | `[0-9KLMXYZ]` + 7 digits + letter | natural person (DNI/NIE) | letter from a 23-symbol table |
//!
//! Layouts are tried in that order and the first match decides which
//! algorithm runs.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Scheme;
use crate::core::checksum::{check_char, check_digit, digital_root_sum, digits, mod10_complement};
use crate::core::pattern;

const MULTIPLIERS: [u32; 7] = [2, 1, 2, 1, 2, 1, 2];

/// Check letters for natural persons, indexed by payload mod 23.
const PERSON_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

static NATIONAL_LEGAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern::compile(r"^[A-HJUV][0-9]{8}$"));
static FOREIGN_LEGAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern::compile(r"^[A-HN-SW][0-9]{7}[A-J]$"));
static PERSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| pattern::compile(r"^[0-9KLMXYZ][0-9]{7}[A-Z]$"));

/// The entity type a Spanish NIF belongs to, detected from its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanishEntity {
    NationalLegal,
    ForeignLegal,
    Person,
}

impl SpanishEntity {
    pub fn detect(clean: &str) -> Option<Self> {
        if pattern::is_match(&NATIONAL_LEGAL, clean) {
            Some(Self::NationalLegal)
        } else if pattern::is_match(&FOREIGN_LEGAL, clean) {
            Some(Self::ForeignLegal)
        } else if pattern::is_match(&PERSON, clean) {
            Some(Self::Person)
        } else {
            None
        }
    }
}

/// Spanish NIF / CIF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spain;

impl Spain {
    /// Digit sums of the seven central digits weighted 2-1-2-1-2-1-2.
    fn control(clean: &str) -> Option<u32> {
        let central = digits::<7>(clean.get(1..8)?)?;
        Some(digital_root_sum(&central, &MULTIPLIERS))
    }

    fn is_valid_national_legal(clean: &str) -> bool {
        let Some(control) = Self::control(clean) else {
            return false;
        };
        check_digit(clean, 1, 1) == Some(mod10_complement(control))
    }

    /// `10 - control mod 10` (1 to 10) mapped onto `A` to `J`.
    fn is_valid_foreign_legal(clean: &str) -> bool {
        let Some(control) = Self::control(clean) else {
            return false;
        };
        let letter = char::from(b'@' + (10 - control % 10) as u8);
        check_char(clean, 1) == Some(letter)
    }

    /// `X`, `Y`, `Z` stand for 0, 1, 2; `K`, `L`, `M` are dropped. The
    /// remaining payload mod 23 picks the check letter.
    fn is_valid_person(clean: &str) -> bool {
        let Some(body) = clean.len().checked_sub(1).and_then(|end| clean.get(..end)) else {
            return false;
        };
        let rest = body.get(1..).unwrap_or_default();
        let payload = match body.as_bytes().first() {
            Some(b'X') => format!("0{rest}"),
            Some(b'Y') => format!("1{rest}"),
            Some(b'Z') => format!("2{rest}"),
            Some(b'K' | b'L' | b'M') => rest.to_string(),
            _ => body.to_string(),
        };
        let Ok(value) = payload.parse::<u32>() else {
            return false;
        };
        let letter = char::from(PERSON_LETTERS[(value % 23) as usize]);
        check_char(clean, 1) == Some(letter)
    }
}

impl Scheme for Spain {
    fn abbreviation(&self) -> &'static str {
        "NIF"
    }

    fn is_valid(&self, clean: &str) -> bool {
        match SpanishEntity::detect(clean) {
            Some(SpanishEntity::NationalLegal) => Self::is_valid_national_legal(clean),
            Some(SpanishEntity::ForeignLegal) => Self::is_valid_foreign_legal(clean),
            Some(SpanishEntity::Person) => Self::is_valid_person(clean),
            None => false,
        }
    }
}
