//! Per-jurisdiction checksum schemes.
//!
//! Each type implements [`Scheme`](crate::core::Scheme). They are usually
//! reached through [`Jurisdiction`](crate::core::Jurisdiction) and
//! [`VatNumber`](crate::core::VatNumber), but can be used directly on
//! numbers that are already clean.

mod australia;
mod austria;
mod canada;
mod germany;
mod italy;
mod luxembourg;
mod malta;
mod netherlands;
mod norway;
mod poland;
mod portugal;
mod romania;
mod slovenia;
mod spain;
mod sweden;

pub use australia::Australia;
pub use austria::Austria;
pub use canada::Canada;
pub use germany::Germany;
pub use italy::Italy;
pub use luxembourg::Luxembourg;
pub use malta::Malta;
pub use netherlands::Netherlands;
pub use norway::Norway;
pub use poland::Poland;
pub use portugal::Portugal;
pub use romania::Romania;
pub use slovenia::Slovenia;
pub use spain::{Spain, SpanishEntity};
pub use sweden::Sweden;
