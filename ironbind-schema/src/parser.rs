//! Interop schema JSON parser.
//!
//! This module provides functionality to parse interop schema files into
//! the internal schema representation. The schema is a JSON array of class
//! records with PascalCase field names.

use crate::error::ParseError;
use crate::types::InteropClass;
use std::path::Path;

/// Parses an interop schema from a JSON string.
///
/// # Arguments
/// * `json` - JSON schema content
///
/// # Returns
/// Parsed class records in file order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or holds zero classes.
pub fn parse_schema(json: &str) -> Result<Vec<InteropClass>, ParseError> {
    let classes: Vec<InteropClass> = serde_json::from_str(json)?;
    if classes.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(classes)
}

/// Parses an interop schema from a JSON file.
///
/// # Arguments
/// * `path` - Path to the schema file
///
/// # Returns
/// Parsed class records in file order.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_schema_file(path: &Path) -> Result<Vec<InteropClass>, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
