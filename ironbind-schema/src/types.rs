//! Interop schema type definitions.
//!
//! This module contains the data structures describing one native class's
//! exposed surface: its properties, methods, and their marshaling
//! requirements. Instances are constructed once from external input and
//! read many times during a generation pass.

use serde::{Deserialize, Serialize};

/// Declarative description of one native class.
///
/// Property and method order is preserved: declaration order in the schema
/// is emission order in the generated wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteropClass {
    /// Host-convention class name, e.g. `ElementModP`.
    pub class_name: String,
    /// Properties exposed by the native class, in declaration order.
    #[serde(default)]
    pub properties: Vec<InteropProperty>,
    /// Methods exposed by the native class, in declaration order.
    #[serde(default)]
    pub methods: Vec<InteropMethod>,
}

impl InteropClass {
    /// Returns the file name of the generated wrapper unit for this class.
    #[must_use]
    pub fn wrapper_file_name(&self) -> String {
        format!("{}.generated.cs", self.class_name)
    }

    /// Returns the native handle type of the class itself,
    /// e.g. `ElementModPHandle`.
    #[must_use]
    pub fn handle_type(&self) -> String {
        format!("{}Handle", self.class_name)
    }
}

/// One property of a native class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteropProperty {
    /// Host-convention property name.
    pub name: String,
    /// Host type name: a primitive name, the literal `string`, or a wrapper
    /// type whose handle is named by `native_handle_type`.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Human-readable description carried into the generated doc comment.
    #[serde(default)]
    pub description: String,
    /// Native handle type returned through an out-parameter. Set if and
    /// only if the property marshals as an opaque handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_handle_type: Option<String>,
}

/// One method of a native class.
///
/// Methods take the enclosing class handle implicitly as the first native
/// argument, followed by the declared parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InteropMethod {
    /// Host-convention method name.
    pub name: String,
    /// Host return type name.
    pub return_type: String,
    /// Human-readable description carried into the generated doc comment.
    #[serde(default)]
    pub description: String,
    /// Declared parameters, in declaration order.
    #[serde(default)]
    pub params: Vec<MethodParam>,
}

/// One declared method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodParam {
    /// Host type name.
    #[serde(rename = "Type")]
    pub type_name: String,
    /// Parameter name.
    pub name: String,
}
