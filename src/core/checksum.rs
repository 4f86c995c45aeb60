//! Arithmetic helpers shared by the checksum algorithms.
//!
//! Every positional scan goes through [`digits`], which only yields a
//! fixed-size array when the input has exactly that many ASCII digits.
//! Callers index the array with compile-time bounds, so a short or
//! non-numeric number fails before any arithmetic runs.

/// Iterated digit sum, with nonzero multiples of 9 reducing to 9.
///
/// ```
/// use vatcheck::core::checksum::digital_root;
///
/// assert_eq!(digital_root(0), 0);
/// assert_eq!(digital_root(16), 7);
/// assert_eq!(digital_root(18), 9);
/// ```
pub fn digital_root(n: u32) -> u32 {
    if n != 0 && n % 9 == 0 { 9 } else { n % 9 }
}

/// Parse `value` as exactly `N` ASCII digits.
pub fn digits<const N: usize>(value: &str) -> Option<[u32; N]> {
    let bytes = value.as_bytes();
    if bytes.len() != N {
        return None;
    }
    let mut out = [0; N];
    for (slot, &b) in out.iter_mut().zip(bytes) {
        if !b.is_ascii_digit() {
            return None;
        }
        *slot = u32::from(b - b'0');
    }
    Some(out)
}

/// Σ digit × weight over the shorter of the two slices.
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Σ digital_root(digit × weight) over the shorter of the two slices.
pub fn digital_root_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(d, w)| digital_root(d * w))
        .sum()
}

/// `(10 - sum mod 10) mod 10`, the usual complement for mod-10 schemes.
pub fn mod10_complement(sum: u32) -> u32 {
    (10 - sum % 10) % 10
}

/// The integer formed by `size` characters starting `offset` characters
/// from the end of `clean`.
///
/// `check_digit(clean, 1, 1)` is the last digit; `check_digit(clean, 2, 2)`
/// the last two. Returns `None` if the range falls outside the value or
/// contains anything but ASCII digits.
pub fn check_digit(clean: &str, offset: usize, size: usize) -> Option<u32> {
    let chars: Vec<char> = clean.chars().collect();
    if size == 0 || size > 9 || offset == 0 || offset > chars.len() {
        return None;
    }
    let start = chars.len() - offset;
    let slice = chars.get(start..start + size)?;
    slice.iter().try_fold(0u32, |acc, c| {
        let digit = c.is_ascii_digit().then(|| *c as u32 - '0' as u32)?;
        Some(acc * 10 + digit)
    })
}

/// The character `offset` positions from the end of `clean`.
pub fn check_char(clean: &str, offset: usize) -> Option<char> {
    if offset == 0 {
        return None;
    }
    clean.chars().rev().nth(offset - 1)
}

/// Compare a computed check value with the embedded one.
///
/// `expected` is `None` when the payload maps to a value that is never
/// issued; such a number matches nothing.
pub fn check_matches(expected: Option<u32>, actual: Option<u32>) -> bool {
    matches!((expected, actual), (Some(e), Some(a)) if e == a)
}
