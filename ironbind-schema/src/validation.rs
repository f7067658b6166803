//! Schema validation utilities.
//!
//! Structural checks run before emission. A class that fails validation is
//! never partially emitted; the generator records the failure and moves on
//! to the next class.

use crate::error::SchemaError;
use crate::types::{InteropClass, InteropMethod, InteropProperty};

/// Validates one class record for structural consistency.
///
/// # Errors
/// Returns `SchemaError::InvalidSchema` describing the first inconsistency
/// found.
pub fn validate_class(class: &InteropClass) -> Result<(), SchemaError> {
    if class.class_name.is_empty() {
        return Err(SchemaError::invalid_schema(
            "<unnamed>",
            "class name must not be empty",
        ));
    }
    if !is_identifier(&class.class_name) {
        return Err(SchemaError::invalid_schema(
            &class.class_name,
            format!("class name '{}' is not a valid identifier", class.class_name),
        ));
    }

    for (index, property) in class.properties.iter().enumerate() {
        validate_property(&class.class_name, index, property)?;
    }
    for (index, method) in class.methods.iter().enumerate() {
        validate_method(&class.class_name, index, method)?;
    }
    Ok(())
}

/// Validates one property record.
fn validate_property(
    class: &str,
    index: usize,
    property: &InteropProperty,
) -> Result<(), SchemaError> {
    if property.name.is_empty() {
        return Err(SchemaError::invalid_schema(
            class,
            format!("property {index} has an empty name"),
        ));
    }
    if !is_identifier(&property.name) {
        return Err(SchemaError::invalid_schema(
            class,
            format!("property name '{}' is not a valid identifier", property.name),
        ));
    }
    if property.type_name.is_empty() {
        return Err(SchemaError::invalid_schema(
            class,
            format!("property '{}' has an empty type", property.name),
        ));
    }
    if let Some(handle) = &property.native_handle_type {
        if handle.is_empty() {
            return Err(SchemaError::invalid_schema(
                class,
                format!("property '{}' declares an empty native handle type", property.name),
            ));
        }
    }
    Ok(())
}

/// Validates one method record.
///
/// The native call shape always takes the enclosing handle plus at least
/// one schema-declared argument, so a parameterless method is rejected.
fn validate_method(class: &str, index: usize, method: &InteropMethod) -> Result<(), SchemaError> {
    if method.name.is_empty() {
        return Err(SchemaError::invalid_schema(
            class,
            format!("method {index} has an empty name"),
        ));
    }
    if !is_identifier(&method.name) {
        return Err(SchemaError::invalid_schema(
            class,
            format!("method name '{}' is not a valid identifier", method.name),
        ));
    }
    if method.return_type.is_empty() {
        return Err(SchemaError::invalid_schema(
            class,
            format!("method '{}' has an empty return type", method.name),
        ));
    }
    if method.params.is_empty() {
        return Err(SchemaError::invalid_schema(
            class,
            format!(
                "method '{}' declares no parameters; the native shape requires \
                 the implicit handle plus one declared argument",
                method.name
            ),
        ));
    }
    for param in &method.params {
        if param.name.is_empty() || param.type_name.is_empty() {
            return Err(SchemaError::invalid_schema(
                class,
                format!("method '{}' has a parameter with an empty name or type", method.name),
            ));
        }
    }
    Ok(())
}

/// Returns true if `s` is a valid identifier in both the host and native
/// conventions: an ASCII letter or underscore first, ASCII alphanumerics
/// or underscores after.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MethodParam;

    fn valid_class() -> InteropClass {
        InteropClass {
            class_name: "Ciphertext".to_string(),
            properties: vec![InteropProperty {
                name: "Pad".to_string(),
                type_name: "ElementModP".to_string(),
                description: "The pad.".to_string(),
                native_handle_type: Some("ElementModPHandle".to_string()),
            }],
            methods: vec![InteropMethod {
                name: "IsValidEncryption".to_string(),
                return_type: "bool".to_string(),
                description: "Checks the proof.".to_string(),
                params: vec![MethodParam {
                    type_name: "string".to_string(),
                    name: "expectedObjectId".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_validate_class_accepts_valid() {
        assert!(validate_class(&valid_class()).is_ok());
    }

    #[test]
    fn test_validate_class_rejects_empty_class_name() {
        let mut class = valid_class();
        class.class_name.clear();
        assert!(matches!(
            validate_class(&class),
            Err(SchemaError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn test_validate_class_rejects_non_identifier_class_name() {
        let mut class = valid_class();
        class.class_name = "2Fast".to_string();
        assert!(validate_class(&class).is_err());
    }

    #[test]
    fn test_validate_class_rejects_handle_property_with_empty_name() {
        let mut class = valid_class();
        class.properties[0].name.clear();
        let err = validate_class(&class).unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn test_validate_class_rejects_empty_handle_type() {
        let mut class = valid_class();
        class.properties[0].native_handle_type = Some(String::new());
        assert!(validate_class(&class).is_err());
    }

    #[test]
    fn test_validate_class_rejects_parameterless_method() {
        let mut class = valid_class();
        class.methods[0].params.clear();
        let err = validate_class(&class).unwrap_err();
        assert!(err.to_string().contains("declares no parameters"));
    }

    #[test]
    fn test_validate_class_rejects_empty_param_name() {
        let mut class = valid_class();
        class.methods[0].params[0].name.clear();
        assert!(validate_class(&class).is_err());
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("ElementModP"));
        assert!(is_identifier("_internal"));
        assert!(is_identifier("a1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("dash-ed"));
    }
}
