//! Field rules shared by `users` and `riders`.
use crate::errors::ModelError;

/// Width of the `phone_number` columns.
pub const PHONE_MAX_LEN: usize = 20;
/// Width of the `profile_image` columns.
pub const PROFILE_IMAGE_MAX_LEN: usize = 512;

/// Optional text must fit its column when present.
pub fn validate_optional_len(field: &str, value: Option<&str>, max: usize) -> Result<(), ModelError> {
    match value {
        Some(v) if v.chars().count() > max => {
            Err(ModelError::Validation(format!("{field} longer than {max} characters")))
        }
        _ => Ok(()),
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ModelError> {
    if phone.trim().is_empty() {
        return Err(ModelError::Validation("phone number required".into()));
    }
    if phone.chars().count() > PHONE_MAX_LEN {
        return Err(ModelError::Validation(format!("phone number longer than {PHONE_MAX_LEN} characters")));
    }
    if !phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ')) {
        return Err(ModelError::Validation("phone number may only contain digits, '+', '-' and spaces".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > 128 {
        return Err(ModelError::Validation("name longer than 128 characters".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_rules() {
        assert!(validate_phone("0811111111").is_ok());
        assert!(validate_phone("+66 81-111-1111").is_ok());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("081abc").is_err());
        assert!(validate_phone(&"1".repeat(PHONE_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn optional_len_rules() {
        assert!(validate_optional_len("profile_image", None, 4).is_ok());
        assert!(validate_optional_len("profile_image", Some("abcd"), 4).is_ok());
        let err = validate_optional_len("profile_image", Some("abcde"), 4).unwrap_err();
        assert!(err.to_string().contains("profile_image"));
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name(" ").is_err());
        assert!(validate_name(&"n".repeat(129)).is_err());
    }
}
