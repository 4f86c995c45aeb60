//! # vatcheck
//!
//! Offline validation of VAT and company registration numbers.
//!
//! Each supported [`Jurisdiction`] pairs a normalization pipeline with a
//! structural check and a checksum algorithm. Nothing here talks to a
//! government registry: a number that validates is well-formed, not
//! necessarily issued.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatcheck::{Jurisdiction, VatNumber};
//!
//! let vat = VatNumber::new(Jurisdiction::Poland, "PL 123-456-32-18");
//! assert!(vat.validate());
//! assert_eq!(vat.clean_number(), "1234563218");
//! assert_eq!(vat.format("a: cn"), "NIP: PL1234563218");
//!
//! // Jurisdiction taken from the prefix
//! let vat = VatNumber::parse("DE 136 695 976").unwrap();
//! assert_eq!(vat.country(), "DE");
//! assert!(vat.validate());
//!
//! assert!(!vatcheck::is_valid(Jurisdiction::Austria, "ATU12345678"));
//! ```
//!
//! ## Supported Jurisdictions
//!
//! | Code | Identifier | Algorithm |
//! |------|------------|-----------|
//! | `AT` | UID | digital-root weighted sum, mod 10 |
//! | `AU` | ABN / TFN | weighted sum mod 89 / mod 11 |
//! | `CA` | BN | Luhn |
//! | `DE` | USt-IdNr. | ISO 7064 MOD 11,10 |
//! | `ES` | NIF | three entity layouts, digit or letter check |
//! | `IT` | P.IVA | structural rule set, then Luhn |
//! | `LU` | TVA | mod 89 |
//! | `MT` | Vat No. | weighted sum mod 37 |
//! | `NL` | Btw-nr. | weighted sum mod 11 |
//! | `NO` | Orgnr | weighted sum mod 11 |
//! | `PL` | NIP | weighted sum mod 11 |
//! | `PT` | NIF | weighted sum mod 11 |
//! | `RO` | CIF | weighted sum × 10 mod 11 |
//! | `SE` | Momsnr. | Luhn |
//! | `SI` | ID za DDV | weighted sum mod 11 |
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`]: failed structural rules at
//! `debug`, every validation result at `trace`. No subscriber is installed.

pub mod core;
pub mod jurisdictions;

// Re-export core types at crate root for convenience
pub use crate::core::*;
