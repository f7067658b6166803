//! Convenience re-exports for common IronBind usage.

pub use ironbind_codegen::{
    ClassGenerator, CodegenError, Diagnostic, Diagnostics, EmissionEngine, GeneratedUnit,
    GeneratorConfig, Severity, generate_class, generate_from_file, generate_from_json,
    generate_schema,
};
pub use ironbind_schema::{
    InteropClass, InteropMethod, InteropProperty, MarshalCategory, MethodParam, ParseError,
    SchemaError, parse_schema, parse_schema_file, property_entry_point, to_native_symbol,
    validate_class,
};
