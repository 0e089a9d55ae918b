//! Icon name casing and validation.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

use crate::error::{Error, Result};

/// `arrow-up-1` → `arrowUp1`
pub fn to_camel_case(value: &str) -> String {
    value.to_lower_camel_case()
}

/// `arrow-up-1` → `ArrowUp1`
pub fn to_pascal_case(value: &str) -> String {
    value.to_upper_camel_case()
}

/// `ArrowUp` → `arrow-up`
pub fn to_kebab_case(value: &str) -> String {
    value.to_kebab_case()
}

/// Icon names double as file stems, so they are restricted to lowercase
/// ASCII letters, digits and single dashes.
pub fn validate_icon_name(value: &str, field_name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation_invalid_argument(
            field_name,
            format!("{} cannot be empty", capitalize(field_name)),
            None,
        ));
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::validation_invalid_argument(
            field_name,
            format!(
                "{} may only contain lowercase letters, digits and dashes",
                capitalize(field_name)
            ),
            Some(value.to_string()),
        ));
    }

    if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
        return Err(Error::validation_invalid_argument(
            field_name,
            format!("{} must be kebab-case", capitalize(field_name)),
            Some(value.to_string()),
        )
        .with_hint(format!("Try '{}'", to_kebab_case(value))));
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let spaced = s.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_from_kebab() {
        assert_eq!(to_camel_case("arrow-up"), "arrowUp");
        assert_eq!(to_camel_case("circle-dot-2"), "circleDot2");
    }

    #[test]
    fn pascal_case_from_kebab() {
        assert_eq!(to_pascal_case("arrow-up"), "ArrowUp");
        assert_eq!(to_pascal_case("home"), "Home");
    }

    #[test]
    fn kebab_case_from_pascal() {
        assert_eq!(to_kebab_case("ArrowUp"), "arrow-up");
        assert_eq!(to_kebab_case("arrowUp"), "arrow-up");
    }

    #[test]
    fn validate_accepts_kebab_names() {
        assert!(validate_icon_name("home", "new_name").is_ok());
        assert!(validate_icon_name("arrow-up-1", "new_name").is_ok());
    }

    #[test]
    fn validate_empty_fails() {
        let err = validate_icon_name("", "new_name").unwrap_err();
        assert_eq!(err.details["problem"], "New name cannot be empty");
    }

    #[test]
    fn validate_rejects_path_separators() {
        assert!(validate_icon_name("../etc", "old_name").is_err());
        assert!(validate_icon_name("a/b", "old_name").is_err());
    }

    #[test]
    fn validate_rejects_uppercase_and_loose_dashes() {
        assert!(validate_icon_name("ArrowUp", "new_name").is_err());
        assert!(validate_icon_name("-home", "new_name").is_err());
        assert!(validate_icon_name("home--alt", "new_name").is_err());
    }
}
