//! Digit extraction shared by the masks

/// Keep only the ASCII digits of `value`
#[must_use]
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
