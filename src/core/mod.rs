//! Shared validation machinery.
//!
//! Normalization, structural rules, checksum helpers and the
//! [`VatNumber`] validator every jurisdiction plugs into.

pub mod checksum;
mod error;
mod format;
mod jurisdiction;
pub mod normalize;
mod number;
pub(crate) mod pattern;
pub mod rules;

pub use error::*;
pub use format::{DEFAULT_TEMPLATE, render};
pub use jurisdiction::*;
pub use normalize::{NormalizationStep, PadSide, Pipeline, normalize};
pub use number::*;
pub use rules::{Rule, RuleSet};
