//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let keep = local.chars().take(if local.chars().count() <= 2 { 1 } else { 2 }).collect::<String>();
        format!("{}***{}", keep, domain)
    } else {
        "***".to_string()
    }
}

/// Lower-cases and trims an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@x.com"), "an***@x.com");
        assert_eq!(mask_email("a@x.com"), "a***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@X.com "), "ana@x.com");
    }
}
