//! Structural rules evaluated before any checksum arithmetic.
//!
//! A [`RuleSet`] runs its rules in construction order and stops at the
//! first failure. Each rule carries a static message describing why it
//! failed; the message is logged, never raised.

use std::sync::LazyLock;

/// A boolean predicate over a cleaned number.
pub trait Rule: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Whether `value` satisfies the rule.
    fn check(&self, value: &str) -> bool;

    /// Why the rule failed.
    fn error(&self) -> &'static str;
}

/// The value is non-empty and consists of ASCII digits only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNumeric;

impl Rule for IsNumeric {
    fn name(&self) -> &'static str {
        "is_numeric"
    }

    fn check(&self, value: &str) -> bool {
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    }

    fn error(&self) -> &'static str {
        "The number must contain digits only."
    }
}

/// The value has exactly this many characters.
#[derive(Debug, Clone, Copy)]
pub struct LengthEquals(pub usize);

impl Rule for LengthEquals {
    fn name(&self) -> &'static str {
        "length_equals"
    }

    fn check(&self, value: &str) -> bool {
        value.chars().count() == self.0
    }

    fn error(&self) -> &'static str {
        "The number does not have the expected length."
    }
}

/// The value does not begin with this prefix.
#[derive(Debug, Clone)]
pub struct NotStartsWith(pub String);

impl Rule for NotStartsWith {
    fn name(&self) -> &'static str {
        "not_starts_with"
    }

    fn check(&self, value: &str) -> bool {
        !value.starts_with(self.0.as_str())
    }

    fn error(&self) -> &'static str {
        "The number starts with a reserved sequence."
    }
}

/// The value ends with this suffix.
#[derive(Debug, Clone)]
pub struct EndsWith(pub String);

impl Rule for EndsWith {
    fn name(&self) -> &'static str {
        "ends_with"
    }

    fn check(&self, value: &str) -> bool {
        value.ends_with(self.0.as_str())
    }

    fn error(&self) -> &'static str {
        "The number does not end with the required suffix."
    }
}

/// Italian tax office codes: `001` to `100`, then `120`, `121`, `888`, `999`.
///
/// Sorted for binary search.
static TAX_OFFICES: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut offices: Vec<String> = (1..=100).map(|code| format!("{code:03}")).collect();
    offices.extend(["120", "121", "888", "999"].map(String::from));
    offices
});

/// The generated table of valid Italian tax office codes.
pub fn tax_offices() -> &'static [String] {
    &TAX_OFFICES
}

/// Check whether `code` is a valid three-digit Italian tax office code.
pub fn is_tax_office(code: &str) -> bool {
    TAX_OFFICES
        .binary_search_by(|office| office.as_str().cmp(code))
        .is_ok()
}

/// Characters 8 to 10 of the value name a valid tax office.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsTaxOffice;

impl Rule for ContainsTaxOffice {
    fn name(&self) -> &'static str {
        "contains_tax_office"
    }

    fn check(&self, value: &str) -> bool {
        let office: String = value.chars().skip(7).take(3).collect();
        office.chars().count() == 3 && is_tax_office(&office)
    }

    fn error(&self) -> &'static str {
        "The number does not contain a valid Tax Office."
    }
}

/// An ordered, short-circuiting conjunction of [`Rule`]s.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.name()))
            .finish()
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already added.
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule `value` fails, if any. Later rules are not evaluated.
    pub fn first_failure(&self, value: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .map(Box::as_ref)
            .find(|rule| !rule.check(value))
    }

    /// `true` only if every rule passes.
    pub fn valid(&self, value: &str) -> bool {
        match self.first_failure(value) {
            Some(rule) => {
                tracing::debug!(
                    rule = rule.name(),
                    reason = rule.error(),
                    "structural rule failed"
                );
                false
            }
            None => true,
        }
    }
}
