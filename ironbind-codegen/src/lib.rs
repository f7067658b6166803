//! # IronBind Codegen
//!
//! C# wrapper generation from interop schemas.
//!
//! This crate provides:
//! - An indentation-aware emission engine with byte-stable output
//! - Wrapper class generation (trampolines, accessors, method forwarders)
//! - A diagnostics collector spanning one generator run
//!
//! Each class is emitted independently; a fatal error in one class skips
//! that class only and is reflected in the run's diagnostics.

pub mod config;
pub mod csharp;
pub mod diagnostics;
pub mod emitter;
pub mod error;

pub use config::GeneratorConfig;
pub use csharp::ClassGenerator;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emitter::EmissionEngine;
pub use error::CodegenError;

use ironbind_schema::InteropClass;
use std::path::Path;

/// One generated wrapper source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Class the unit was generated for.
    pub class_name: String,
    /// File name the unit should be written to.
    pub file_name: String,
    /// Generated C# source text.
    pub source: String,
}

/// Generates the wrapper source unit for one class.
///
/// # Errors
/// Returns `CodegenError` if the class is structurally invalid; the
/// failure is also recorded as a fatal diagnostic.
pub fn generate_class(
    class: &InteropClass,
    config: &GeneratorConfig,
    diagnostics: &Diagnostics,
) -> Result<String, CodegenError> {
    ClassGenerator::new(class, config).generate(diagnostics)
}

/// Generates wrapper units for every class in a schema.
///
/// Classes are independent: a class whose emission records a fatal
/// diagnostic produces no unit, and the remaining classes still generate.
#[must_use]
pub fn generate_schema(
    classes: &[InteropClass],
    config: &GeneratorConfig,
    diagnostics: &Diagnostics,
) -> Vec<GeneratedUnit> {
    classes
        .iter()
        .filter_map(|class| {
            generate_class(class, config, diagnostics)
                .ok()
                .map(|source| GeneratedUnit {
                    class_name: class.class_name.clone(),
                    file_name: class.wrapper_file_name(),
                    source,
                })
        })
        .collect()
}

/// Generates wrapper units from an interop schema JSON string.
///
/// # Arguments
/// * `json` - Interop schema content
///
/// # Errors
/// Returns `CodegenError` if parsing fails. Per-class emission failures
/// are reported through `diagnostics` instead.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
    diagnostics: &Diagnostics,
) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let classes = ironbind_schema::parse_schema(json)?;
    Ok(generate_schema(&classes, config, diagnostics))
}

/// Generates wrapper units from an interop schema file.
///
/// # Arguments
/// * `path` - Path to the interop schema JSON file
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &Path,
    config: &GeneratorConfig,
    diagnostics: &Diagnostics,
) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let classes = ironbind_schema::parse_schema_file(path)?;
    Ok(generate_schema(&classes, config, diagnostics))
}
