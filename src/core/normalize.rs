//! Input normalization.
//!
//! A [`Pipeline`] is an ordered list of [`NormalizationStep`]s applied
//! left to right, each consuming the previous step's output. The default
//! pipeline trims, uppercases, removes separator characters, strips
//! known country codes and trims once more. No step fails: when nothing
//! matches, the input is passed through unchanged.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Characters removed by the default pipeline.
pub const DEFAULT_REMOVED_CHARS: &[char] = &[' ', '(', ')', ',', '-', '.'];

/// Country codes removed by the default pipeline.
///
/// These are removed wherever they occur in the input, not only as a
/// leading prefix.
pub const DEFAULT_COUNTRY_CODES: &[&str] =
    &["AR", "AT", "BE", "CA", "CO", "LU", "NO", "PL", "PT", "ES"];

pub(crate) static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

/// Which side of the value [`NormalizationStep::Pad`] fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadSide {
    Left,
    Right,
}

/// A single text transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum NormalizationStep {
    /// Remove surrounding whitespace.
    Trim,
    /// Uppercase every letter.
    Uppercase,
    /// Remove every occurrence of the listed characters.
    RemoveChars { chars: Vec<char> },
    /// Remove every occurrence of the listed codes, ASCII case-insensitively.
    ///
    /// Removal repeats until no code is left, so a code that only appears
    /// after another one was cut out (`"AATT"`) is removed as well.
    StripCountryCodes { codes: Vec<String> },
    /// Remove a single leading occurrence of `prefix`.
    StripPrefix { prefix: String },
    /// Remove a single trailing occurrence of `suffix`.
    StripSuffix { suffix: String },
    /// Pad with `fill` up to `length` characters. Longer values are kept as is.
    Pad {
        length: usize,
        fill: char,
        side: PadSide,
    },
}

impl NormalizationStep {
    /// Removal of the default separator characters.
    pub fn remove_default_chars() -> Self {
        Self::RemoveChars {
            chars: DEFAULT_REMOVED_CHARS.to_vec(),
        }
    }

    /// Removal of the default country codes.
    pub fn strip_default_country_codes() -> Self {
        Self::StripCountryCodes {
            codes: DEFAULT_COUNTRY_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    pub fn strip_prefix(prefix: impl Into<String>) -> Self {
        Self::StripPrefix {
            prefix: prefix.into(),
        }
    }

    pub fn strip_suffix(suffix: impl Into<String>) -> Self {
        Self::StripSuffix {
            suffix: suffix.into(),
        }
    }

    /// Left-pad with zeros to `length` characters.
    pub fn zero_pad(length: usize) -> Self {
        Self::Pad {
            length,
            fill: '0',
            side: PadSide::Left,
        }
    }

    /// Apply this step to `value`.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Self::Trim => value.trim().to_string(),
            Self::Uppercase => value.to_uppercase(),
            Self::RemoveChars { chars } => value.chars().filter(|c| !chars.contains(c)).collect(),
            Self::StripCountryCodes { codes } => strip_codes(value, codes),
            Self::StripPrefix { prefix } => match value.get(..prefix.len()) {
                Some(head) if !prefix.is_empty() && head.eq_ignore_ascii_case(prefix) => {
                    value[prefix.len()..].to_string()
                }
                _ => value.to_string(),
            },
            Self::StripSuffix { suffix } => {
                let cut = value.len().saturating_sub(suffix.len());
                match value.get(cut..) {
                    Some(tail) if !suffix.is_empty() && tail.eq_ignore_ascii_case(suffix) => {
                        value[..cut].to_string()
                    }
                    _ => value.to_string(),
                }
            }
            Self::Pad { length, fill, side } => {
                let count = value.chars().count();
                if count >= *length {
                    return value.to_string();
                }
                let padding: String = std::iter::repeat_n(*fill, length - count).collect();
                match side {
                    PadSide::Left => padding + value,
                    PadSide::Right => format!("{value}{padding}"),
                }
            }
        }
    }
}

fn strip_codes(value: &str, codes: &[String]) -> String {
    let mut current = value.to_string();
    loop {
        let mut next = current.clone();
        for code in codes {
            next = remove_ignore_ascii_case(&next, code);
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Remove every non-overlapping occurrence of `needle`, scanning left to right.
fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() {
        return haystack.to_string();
    }

    let mut out = String::with_capacity(haystack.len());
    let mut start = 0;
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()].eq_ignore_ascii_case(pat) {
            out.push_str(&haystack[start..i]);
            i += pat.len();
            start = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&haystack[start..]);
    out
}

/// An ordered composition of [`NormalizationStep`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    steps: Vec<NormalizationStep>,
}

impl Default for Pipeline {
    /// Trim, uppercase, remove separators, strip country codes, trim again.
    ///
    /// The closing trim drops whitespace that only reaches the edge once a
    /// code is cut out, as in `"AT\t5"`.
    fn default() -> Self {
        Self {
            steps: vec![
                NormalizationStep::Trim,
                NormalizationStep::Uppercase,
                NormalizationStep::remove_default_chars(),
                NormalizationStep::strip_default_country_codes(),
                NormalizationStep::Trim,
            ],
        }
    }
}

impl Pipeline {
    /// A pipeline with no steps; `normalize` returns its input.
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, run after all existing ones.
    pub fn then(mut self, step: NormalizationStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Insert a step that runs before all existing ones.
    pub fn prepend(mut self, step: NormalizationStep) -> Self {
        self.steps.insert(0, step);
        self
    }

    pub fn steps(&self) -> &[NormalizationStep] {
        &self.steps
    }

    /// Run every step in order over `raw`.
    pub fn normalize(&self, raw: &str) -> String {
        self.steps
            .iter()
            .fold(raw.to_string(), |value, step| step.apply(&value))
    }
}

/// Normalize `raw` with the default pipeline.
pub fn normalize(raw: &str) -> String {
    DEFAULT_PIPELINE.normalize(raw)
}
