//! Digit extraction shared by every normalizer.

/// Remove every character that is not an ASCII decimal digit, keeping the
/// digits in order.
///
/// Only `0`-`9` count. Other Unicode digits (Arabic-Indic, full-width)
/// are stripped like any other noise.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Count ASCII decimal digits without allocating.
pub fn digit_count(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}
