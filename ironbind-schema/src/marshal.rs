//! Marshal category classification.
//!
//! Every property marshals across the native boundary in exactly one of
//! three ways. The classification is derived from the property record,
//! never stored in the schema.

use crate::types::InteropProperty;

/// Strategy used to convert a native value into a host-representable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarshalCategory {
    /// Native call returns the primitive value directly; no additional
    /// marshaling and no status check.
    Primitive,
    /// Native call returns an owned pointer; the wrapper copies it into a
    /// host string and releases the pointer exactly once.
    StringOwned,
    /// Native call returns a handle via an out-parameter; the wrapper
    /// wraps it in a new owning object of the declared type.
    OpaqueHandle,
}

impl MarshalCategory {
    /// Classifies a property.
    ///
    /// Total and side-effect-free: every `(type, native_handle_type)` pair
    /// maps to exactly one category. The string check runs first, so
    /// `string` wins even when a handle type is also present.
    #[must_use]
    pub fn classify(property: &InteropProperty) -> Self {
        if property.type_name == "string" {
            Self::StringOwned
        } else if property.native_handle_type.is_some() {
            Self::OpaqueHandle
        } else {
            Self::Primitive
        }
    }

    /// Returns true if the native call reports a status the wrapper must
    /// check before taking ownership of any out value.
    #[must_use]
    pub const fn has_status(self) -> bool {
        !matches!(self, Self::Primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(type_name: &str, handle: Option<&str>) -> InteropProperty {
        InteropProperty {
            name: "Value".to_string(),
            type_name: type_name.to_string(),
            description: String::new(),
            native_handle_type: handle.map(str::to_string),
        }
    }

    #[test]
    fn test_classify_primitive() {
        assert_eq!(
            MarshalCategory::classify(&property("ulong", None)),
            MarshalCategory::Primitive
        );
        assert_eq!(
            MarshalCategory::classify(&property("bool", None)),
            MarshalCategory::Primitive
        );
    }

    #[test]
    fn test_classify_string_owned() {
        assert_eq!(
            MarshalCategory::classify(&property("string", None)),
            MarshalCategory::StringOwned
        );
    }

    #[test]
    fn test_classify_opaque_handle() {
        assert_eq!(
            MarshalCategory::classify(&property("ElementModP", Some("ElementModPHandle"))),
            MarshalCategory::OpaqueHandle
        );
    }

    #[test]
    fn test_classify_string_wins_over_handle() {
        // Defensive ordering: the string check runs before the handle check.
        assert_eq!(
            MarshalCategory::classify(&property("string", Some("StrayHandle"))),
            MarshalCategory::StringOwned
        );
    }

    #[test]
    fn test_classify_is_total() {
        // Every combination lands in exactly one category without failing.
        for type_name in ["string", "ulong", "ElementModQ", ""] {
            for handle in [None, Some("SomeHandle")] {
                let _ = MarshalCategory::classify(&property(type_name, handle));
            }
        }
    }

    #[test]
    fn test_has_status() {
        assert!(!MarshalCategory::Primitive.has_status());
        assert!(MarshalCategory::StringOwned.has_status());
        assert!(MarshalCategory::OpaqueHandle.has_status());
    }
}
