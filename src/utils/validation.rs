use crate::utils::error::{Result, SeatingError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(SeatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SeatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SeatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SeatingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Branch codes are matched against whitespace-split input tokens, so a
/// code containing whitespace could never match anything.
pub fn validate_branch_codes(field_name: &str, codes: &[String]) -> Result<()> {
    if codes.is_empty() {
        return Err(SeatingError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one branch code is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for code in codes {
        validate_non_empty_string(field_name, code)?;
        if code.chars().any(char::is_whitespace) {
            return Err(SeatingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: code.clone(),
                reason: "Branch codes cannot contain whitespace".to_string(),
            });
        }
        if !seen.insert(code.as_str()) {
            return Err(SeatingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: code.clone(),
                reason: "Duplicate branch code".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("files.input", "students.txt").is_ok());
        assert!(validate_path("files.input", "").is_err());
        assert!(validate_path("files.input", "   ").is_err());
        assert!(validate_path("files.input", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("layout.rooms", 5, 1).is_ok());
        assert!(validate_positive_number("layout.rooms", 0, 1).is_err());
    }

    #[test]
    fn test_validate_branch_codes() {
        let codes: Vec<String> = ["CSE", "IT"].iter().map(|s| s.to_string()).collect();
        assert!(validate_branch_codes("branches.order", &codes).is_ok());

        assert!(validate_branch_codes("branches.order", &[]).is_err());

        let duplicated: Vec<String> = ["CSE", "IT", "CSE"].iter().map(|s| s.to_string()).collect();
        assert!(validate_branch_codes("branches.order", &duplicated).is_err());

        let spaced = vec!["E NTC".to_string()];
        assert!(validate_branch_codes("branches.order", &spaced).is_err());
    }
}
