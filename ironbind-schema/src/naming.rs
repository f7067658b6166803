//! Host-to-native identifier conversion.
//!
//! Native entry points follow a lower-snake convention while the schema
//! carries host-convention (PascalCase) names. The conversion is one-way:
//! casing group information is lost, so it is idempotent but not
//! invertible.

use crate::error::SchemaError;

/// Converts a host-convention identifier to a native symbol name.
///
/// The first character is lower-cased; every subsequent uppercase ASCII
/// letter is emitted as an underscore followed by its lowercase form.
/// Inputs shorter than two characters are returned unchanged.
///
/// # Errors
/// Returns `SchemaError::InvalidArgument` if the identifier is empty.
pub fn to_native_symbol(identifier: &str) -> Result<String, SchemaError> {
    if identifier.is_empty() {
        return Err(SchemaError::invalid_argument(
            "identifier must not be empty",
        ));
    }
    if identifier.chars().count() < 2 {
        return Ok(identifier.to_string());
    }

    let mut result = String::with_capacity(identifier.len() + 4);
    let mut chars = identifier.chars();
    if let Some(first) = chars.next() {
        result.push(first.to_ascii_lowercase());
    }
    for c in chars {
        if c.is_ascii_uppercase() {
            result.push('_');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    Ok(result)
}

/// Builds the native entry-point symbol for a property accessor,
/// e.g. `("Sample", "Value")` -> `eg_sample_get_value`.
///
/// # Errors
/// Returns `SchemaError::InvalidArgument` if either name is empty.
pub fn property_entry_point(class_name: &str, property_name: &str) -> Result<String, SchemaError> {
    if class_name.is_empty() {
        return Err(SchemaError::invalid_argument("class name must not be empty"));
    }
    if property_name.is_empty() {
        return Err(SchemaError::invalid_argument(
            "property name must not be empty",
        ));
    }
    to_native_symbol(&format!("Eg{class_name}Get{property_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_native_symbol() {
        assert_eq!(to_native_symbol("ElementModP").unwrap(), "element_mod_p");
        assert_eq!(to_native_symbol("Timestamp").unwrap(), "timestamp");
        assert_eq!(to_native_symbol("ObjectId").unwrap(), "object_id");
    }

    #[test]
    fn test_to_native_symbol_short_input_unchanged() {
        assert_eq!(to_native_symbol("A").unwrap(), "A");
        assert_eq!(to_native_symbol("x").unwrap(), "x");
    }

    #[test]
    fn test_to_native_symbol_empty_is_invalid_argument() {
        let err = to_native_symbol("").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidArgument { .. }));
    }

    #[test]
    fn test_to_native_symbol_idempotent_on_snake_input() {
        for input in ["element_mod_p", "eg_sample_get_value", "timestamp"] {
            let once = to_native_symbol(input).unwrap();
            let twice = to_native_symbol(&once).unwrap();
            assert_eq!(once, input);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_to_native_symbol_consecutive_uppercase() {
        // Each uppercase letter gets its own underscore; grouping is lost.
        assert_eq!(to_native_symbol("ABC").unwrap(), "a_b_c");
    }

    #[test]
    fn test_property_entry_point() {
        assert_eq!(
            property_entry_point("Sample", "Value").unwrap(),
            "eg_sample_get_value"
        );
        assert_eq!(
            property_entry_point("CiphertextBallot", "ObjectId").unwrap(),
            "eg_ciphertext_ballot_get_object_id"
        );
    }

    #[test]
    fn test_property_entry_point_rejects_empty_names() {
        assert!(property_entry_point("", "Value").is_err());
        assert!(property_entry_point("Sample", "").is_err());
    }
}
