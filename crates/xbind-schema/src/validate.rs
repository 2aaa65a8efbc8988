use crate::{MAX_PROPERTY_NAME_LEN, MAX_TYPE_NAME_LEN};

/// Ensure a type name is non-empty, ASCII, and within the maximum length.
pub fn validate_type_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("type name is empty".to_string());
    }
    if name.len() > MAX_TYPE_NAME_LEN {
        return Err(format!(
            "type name '{name}' exceeds max length {MAX_TYPE_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("type name '{name}' must be ASCII"));
    }

    Ok(())
}

/// Ensure a property ident is non-empty, ASCII, and within the maximum length.
pub fn validate_property_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("property ident is empty".to_string());
    }
    if ident.len() > MAX_PROPERTY_NAME_LEN {
        return Err(format!(
            "property ident '{ident}' exceeds max length {MAX_PROPERTY_NAME_LEN}"
        ));
    }
    if !ident.is_ascii() {
        return Err(format!("property ident '{ident}' must be ASCII"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert!(validate_type_name("").is_err(), "empty names should fail");
        assert!(validate_type_name(&"D".repeat(MAX_TYPE_NAME_LEN + 1)).is_err());
        assert!(validate_property_ident("").is_err());
    }

    #[test]
    fn rejects_non_ascii_names() {
        assert!(validate_type_name("Dökument").is_err());
        assert!(validate_property_ident("nâme").is_err());
    }

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_type_name("Document").is_ok());
        assert!(validate_property_ident("backup_code").is_ok());
    }
}
