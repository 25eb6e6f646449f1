//! Input normalisation shared by request validation.

/// Trim surrounding whitespace; `None` when nothing is left.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Same as [`non_empty`] for optional inputs.
pub fn non_empty_opt(value: Option<&str>) -> Option<String> {
    value.and_then(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(non_empty("  0811111111 "), Some("0811111111".to_string()));
        assert_eq!(non_empty(" \t\n"), None);
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn optional_inputs() {
        assert_eq!(non_empty_opt(None), None);
        assert_eq!(non_empty_opt(Some("   ")), None);
        assert_eq!(non_empty_opt(Some(" img.png")), Some("img.png".to_string()));
    }
}
