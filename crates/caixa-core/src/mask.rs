//! # Progressive Input Masks
//!
//! A [`Mask`] is a fixed pattern of `#` digit slots interleaved with
//! literal separators, such as `###.###.###-##`. Applying a mask to a digit
//! string fills the slots left to right and emits each literal only once a
//! digit follows it, so partial input renders as a partial mask:
//!
//! | digits          | `###.###.###-##`   |
//! |-----------------|--------------------|
//! | `""`            | `""`               |
//! | `"123"`         | `"123"`            |
//! | `"1234"`        | `"123.4"`          |
//! | `"12345678901"` | `"123.456.789-01"` |
//!
//! Digits beyond the mask width are dropped.

/// Placeholder character for a digit slot.
pub const DIGIT_SLOT: char = '#';

/// Brazilian individual taxpayer number: 11 digits.
pub const CPF_MASK: Mask = Mask::new("###.###.###-##");

/// Brazilian company taxpayer number: 14 digits.
pub const CNPJ_MASK: Mask = Mask::new("##.###.###/####-##");

/// Landline with area code: 10 digits.
pub const LANDLINE_MASK: Mask = Mask::new("(##) ####-####");

/// Mobile with area code: 11 digits.
pub const MOBILE_MASK: Mask = Mask::new("(##) #####-####");

/// A fixed-width display mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    pattern: &'static str,
}

impl Mask {
    /// Wrap a pattern. Every `#` is a digit slot; anything else is a literal.
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digit slots in the pattern.
    pub fn width(&self) -> usize {
        self.pattern.chars().filter(|c| *c == DIGIT_SLOT).count()
    }

    /// Fill the mask with `digits`.
    ///
    /// `digits` is expected to hold ASCII digits only (see
    /// [`crate::digits::digits_only`]); any other character is placed in a
    /// slot verbatim. Literals are held back until the next slot is filled,
    /// so the output never ends with a separator.
    pub fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        let mut pending = String::new();
        let mut source = digits.chars();

        for token in self.pattern.chars() {
            if token != DIGIT_SLOT {
                pending.push(token);
                continue;
            }
            let Some(d) = source.next() else {
                break;
            };
            out.push_str(&pending);
            pending.clear();
            out.push(d);
        }

        out
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern)
    }
}
