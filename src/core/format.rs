//! Display templates for VAT numbers.
//!
//! A template is plain text in which three characters are placeholders:
//!
//! | Placeholder | Replaced by |
//! |-------------|-------------|
//! | `c` | ISO country code |
//! | `n` | cleaned number |
//! | `a` | local abbreviation |
//!
//! Every other character is copied unchanged. Substitution happens in a
//! single pass, so placeholder characters inside a replacement are never
//! substituted again.

/// Country code directly followed by the cleaned number, e.g. `DE136695976`.
pub const DEFAULT_TEMPLATE: &str = "cn";

/// Render `template` with the given field values.
pub fn render(template: &str, country: &str, number: &str, abbreviation: &str) -> String {
    let mut out = String::with_capacity(template.len() + number.len() + abbreviation.len());
    for ch in template.chars() {
        match ch {
            'c' => out.push_str(country),
            'n' => out.push_str(number),
            'a' => out.push_str(abbreviation),
            other => out.push(other),
        }
    }
    out
}
