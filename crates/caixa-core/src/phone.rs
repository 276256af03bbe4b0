//! # Phone Normalization
//!
//! Brazilian numbers with a two-digit area code. Up to 10 digits masks as a
//! landline, `(##) ####-####`; 11 digits masks as a mobile,
//! `(##) #####-####`. Digits past the 11th are dropped.
//!
//! Unlike [`crate::document::validate_document`], which accepts two exact
//! lengths, phone validation accepts the closed range 10..=11.

use serde::{Deserialize, Serialize};

use crate::digits::{digit_count, digits_only};
use crate::mask::{LANDLINE_MASK, MOBILE_MASK};

/// Digits in a landline number, area code included.
pub const LANDLINE_LEN: usize = 10;

/// Digits in a mobile number, area code included.
pub const MOBILE_LEN: usize = 11;

/// Which phone shape a digit string takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneKind {
    /// Fixed line: 4-digit prefix.
    Landline,
    /// Mobile: 5-digit prefix.
    Mobile,
}

impl PhoneKind {
    /// Select the mask used while typing; flips to mobile past 10 digits.
    pub fn classify(input: &str) -> Self {
        if digit_count(input) <= LANDLINE_LEN {
            Self::Landline
        } else {
            Self::Mobile
        }
    }

    /// Identify a complete number, `None` unless it holds 10 or 11 digits.
    pub fn detect(input: &str) -> Option<Self> {
        match digit_count(input) {
            LANDLINE_LEN => Some(Self::Landline),
            MOBILE_LEN => Some(Self::Mobile),
            _ => None,
        }
    }

    /// Short label used in CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landline => "landline",
            Self::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mask a phone number for display. Total; see the module docs for shapes.
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);
    match PhoneKind::classify(&digits) {
        PhoneKind::Landline => LANDLINE_MASK.apply(&digits),
        PhoneKind::Mobile => MOBILE_MASK.apply(&digits),
    }
}

/// `true` iff the input carries 10 or 11 digits.
pub fn validate_phone(input: &str) -> bool {
    (LANDLINE_LEN..=MOBILE_LEN).contains(&digit_count(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mobile() {
        assert_eq!(format_phone("11999999999"), "(11) 99999-9999");
    }

    #[test]
    fn formats_landline() {
        assert_eq!(format_phone("1133333333"), "(11) 3333-3333");
    }

    #[test]
    fn formats_partial_input() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("113333"), "(11) 3333");
        assert_eq!(format_phone("1133333"), "(11) 3333-3");
    }

    #[test]
    fn flips_to_mobile_after_ten_digits() {
        assert_eq!(format_phone("(11) 3333-3333"), "(11) 3333-3333");
        assert_eq!(format_phone("(11) 3333-33339"), "(11) 33333-3339");
    }

    #[test]
    fn drops_digits_past_eleven() {
        assert_eq!(format_phone("1199999999912"), "(11) 99999-9999");
    }

    #[test]
    fn reformatting_is_stable() {
        let once = format_phone("11 9 9999 9999");
        assert_eq!(once, "(11) 99999-9999");
        assert_eq!(format_phone(&once), once);
    }

    #[test]
    fn validates_range() {
        assert!(validate_phone("1133333333"));
        assert!(validate_phone("11999999999"));
        assert!(validate_phone("(11) 99999-9999"));

        assert!(!validate_phone(""));
        assert!(!validate_phone("123"));
        assert!(!validate_phone("113333333"));
        assert!(!validate_phone("119999999990"));
    }

    #[test]
    fn classify_and_detect() {
        assert_eq!(PhoneKind::classify(""), PhoneKind::Landline);
        assert_eq!(PhoneKind::classify("1133333333"), PhoneKind::Landline);
        assert_eq!(PhoneKind::classify("11999999999"), PhoneKind::Mobile);
        assert_eq!(PhoneKind::detect("(11) 3333-3333"), Some(PhoneKind::Landline));
        assert_eq!(PhoneKind::detect("123"), None);
        assert_eq!(PhoneKind::Mobile.to_string(), "mobile");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_alphabet(s in "\\PC{0,40}") {
            let out = format_phone(&s);
            prop_assert!(out
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | ' ' | '-')));
        }

        #[test]
        fn digits_survive_masking(s in "[0-9 ()\\-a-z]{0,30}") {
            let expected: String = digits_only(&s).chars().take(MOBILE_LEN).collect();
            prop_assert_eq!(digits_only(&format_phone(&s)), expected);
        }

        #[test]
        fn validity_is_length_range(s in "[0-9]{0,16}") {
            let n = s.len();
            prop_assert_eq!(validate_phone(&s), n == 10 || n == 11);
        }
    }
}
