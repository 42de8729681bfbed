use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Longest accepted brand or color name, in characters.
pub const MAX_NAME_LEN: usize = 20;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("name pattern is a valid regex"));

/// Why a brand/color pair was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("Please enter both brand and color.")]
    Empty,

    #[error("Brand and color should not exceed {max} characters.", max = MAX_NAME_LEN)]
    TooLong,

    #[error("Brand and color should only contain letters and spaces.")]
    DisallowedCharacters,
}

/// Checks a brand/color pair.
///
/// Each rule is applied to both fields before the next rule runs, so an empty
/// color is reported ahead of an over-long brand.
pub fn validate(brand: &str, color: &str) -> Result<(), InvalidReason> {
    if brand.is_empty() || color.is_empty() {
        return Err(InvalidReason::Empty);
    }

    if brand.chars().count() > MAX_NAME_LEN || color.chars().count() > MAX_NAME_LEN {
        return Err(InvalidReason::TooLong);
    }

    if !NAME_PATTERN.is_match(brand) || !NAME_PATTERN.is_match(color) {
        return Err(InvalidReason::DisallowedCharacters);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_spaces() {
        assert_eq!(validate("BrandA", "Red"), Ok(()));
        assert_eq!(validate("Citadel", "Mephiston Red"), Ok(()));
        assert_eq!(validate("abcdefghijklmnopqrst", "T"), Ok(()));
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(validate("", "Red"), Err(InvalidReason::Empty));
        assert_eq!(validate("BrandA", ""), Err(InvalidReason::Empty));
    }

    #[test]
    fn rejects_names_over_twenty_characters() {
        let long = "RedRedRedRedRedRedRedRedRedRedRedRedRedRedRedRedRedRedRedRed";
        assert_eq!(validate("BrandA", long), Err(InvalidReason::TooLong));
        assert_eq!(validate("abcdefghijklmnopqrstu", "Red"), Err(InvalidReason::TooLong));
    }

    #[test]
    fn rejects_digits_and_punctuation() {
        assert_eq!(validate("BrandA", "123"), Err(InvalidReason::DisallowedCharacters));
        assert_eq!(validate("Brand-A", "Red"), Err(InvalidReason::DisallowedCharacters));
        assert_eq!(validate("BrandA", "Red!"), Err(InvalidReason::DisallowedCharacters));
        assert_eq!(validate("Vallejo", "Rojo Ñ"), Err(InvalidReason::DisallowedCharacters));
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let message = InvalidReason::TooLong.to_string();
        assert_eq!(message, "Brand and color should not exceed 20 characters.");
        assert!(message.contains(&MAX_NAME_LEN.to_string()));

        let at_limit = "a".repeat(MAX_NAME_LEN);
        let over_limit = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(validate(&at_limit, "Red"), Ok(()));
        assert_eq!(validate(&over_limit, "Red"), Err(InvalidReason::TooLong));
    }

    #[test]
    fn empty_check_runs_before_length_check() {
        assert_eq!(validate("abcdefghijklmnopqrstuvwxyz", ""), Err(InvalidReason::Empty));
    }

    #[test]
    fn length_check_runs_before_pattern_check() {
        assert_eq!(validate("Brand1", "abcdefghijklmnopqrstuvwxyz"), Err(InvalidReason::TooLong));
    }
}
