use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Regex for slug fields (category slug, slider identifier)
    /// Must be lowercase alphanumeric with single hyphens between words
    /// - Valid: "summer-sale", "mens-shoes", "x1"
    /// - Invalid: "-sale", "sale-", "summer--sale", "Sale", "summer_sale"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for CSS hex color codes: `#RGB` or `#RRGGBB`
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();

    /// Regex for promo codes: uppercase letters, digits, `-` and `_`
    pub static ref PROMO_CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9][A-Z0-9_-]{2,31}$").unwrap();
}

/// Reject zero and negative amounts
pub fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}

/// Reject negative amounts
pub fn validate_non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Reject strings that are empty once trimmed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Require a dotted domain after the `@`, which the plain email rule allows
/// to be a bare host such as `user@localhost`
pub fn validate_email_domain(value: &str) -> Result<(), ValidationError> {
    let dotted = value.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    });
    if !dotted {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("must be a valid email address".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain_needs_a_dot() {
        assert!(validate_email_domain("rahim@example.com").is_ok());
        assert!(validate_email_domain("care@shop.com.bd").is_ok());
        assert!(validate_email_domain("rahim@example").is_err());
        assert!(validate_email_domain("rahim@example.").is_err());
        assert!(validate_email_domain("rahim@.com").is_err());
        assert!(validate_email_domain("rahim").is_err());
    }

    #[test]
    fn test_slug_regex() {
        assert!(SLUG_REGEX.is_match("summer-sale"));
        assert!(SLUG_REGEX.is_match("x1"));
        assert!(!SLUG_REGEX.is_match("-sale"));
        assert!(!SLUG_REGEX.is_match("sale-"));
        assert!(!SLUG_REGEX.is_match("summer--sale"));
        assert!(!SLUG_REGEX.is_match("Sale"));
        assert!(!SLUG_REGEX.is_match(""));
    }

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#fff"));
        assert!(HEX_COLOR_REGEX.is_match("#1A2b3C"));
        assert!(!HEX_COLOR_REGEX.is_match("fff"));
        assert!(!HEX_COLOR_REGEX.is_match("#ffff"));
        assert!(!HEX_COLOR_REGEX.is_match("#ggg"));
    }

    #[test]
    fn test_promo_code_regex() {
        assert!(PROMO_CODE_REGEX.is_match("EID2025"));
        assert!(PROMO_CODE_REGEX.is_match("FREE_SHIP-10"));
        assert!(!PROMO_CODE_REGEX.is_match("ab"));
        assert!(!PROMO_CODE_REGEX.is_match("lower"));
        assert!(!PROMO_CODE_REGEX.is_match("_LEADING"));
    }

    #[test]
    fn test_decimal_validators() {
        assert!(validate_positive_decimal(&Decimal::new(1, 2)).is_ok());
        assert!(validate_positive_decimal(&Decimal::ZERO).is_err());
        assert!(validate_non_negative_decimal(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_decimal(&Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Sale").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
