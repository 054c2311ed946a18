use validator::{ValidateEmail, ValidationError};

/// Accepts `local@domain.tld`: a syntactically valid address whose domain has
/// at least one dot and an alphabetic top-level label of two or more chars.
pub fn validate_email_shape(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() && has_dotted_domain(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some("must be a valid email address".into());
    Err(err)
}

/// Rejects values made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Treats a missing, empty or whitespace-only optional field as absent.
pub fn blank_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn has_dotted_domain(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_values_become_none() {
        assert_eq!(blank_to_none(None), None);
        assert_eq!(blank_to_none(Some("")), None);
        assert_eq!(blank_to_none(Some("   ")), None);
        assert_eq!(blank_to_none(Some(" 5 years ")), Some("5 years".to_string()));
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(validate_not_blank("Engineer").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        for blank in ["", " ", "\t\n  "] {
            let err = validate_not_blank(blank).unwrap_err();
            assert_eq!(err.code, "blank");
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email_shape("user@example.com").is_ok());
        assert!(validate_email_shape("first.last+jobs@mail.example.co.uk").is_ok());
    }

    #[test]
    fn rejects_addresses_without_dotted_domain() {
        for bad in [
            "",
            "user",
            "user@",
            "@example.com",
            "user@localhost",
            "user@example.",
            "user@example.c",
            "user@example.c0m",
            "user @example.com",
        ] {
            assert!(validate_email_shape(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
