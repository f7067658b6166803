//! # IronBind
//!
//! Native interop binding generator.
//!
//! IronBind reads a declarative JSON description of a native library's
//! class surface (classes, properties, methods, and their marshaling
//! requirements) and emits safe C# wrapper source units that call into
//! the native library through fixed-signature trampoline functions,
//! manage opaque handle lifetimes, and convert native status codes into
//! host-language failures.
//!
//! ## Features
//!
//! - **Schema-driven generation** - one wrapper unit per native class
//! - **Three marshal categories** - primitive pass-through, owned-string
//!   copy-and-release, opaque-handle wrap-on-success
//! - **Byte-stable output** - regenerating from an unchanged schema never
//!   perturbs diffs
//! - **Per-class isolation** - a fatal diagnostic in one class never
//!   truncates or suppresses the others
//!
//! ## Quick Start
//!
//! ```
//! use ironbind::prelude::*;
//!
//! let schema = r#"[ { "ClassName": "Sample", "Properties": [
//!     { "Name": "Value", "Type": "Foo",
//!       "Description": "The wrapped value.",
//!       "NativeHandleType": "FooHandle" } ] } ]"#;
//!
//! let diagnostics = Diagnostics::new();
//! let units = generate_from_json(schema, &GeneratorConfig::default(), &diagnostics)
//!     .expect("schema parses");
//! assert!(units[0].source.contains("eg_sample_get_value"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - interop schema model, parsing, naming, classification
//! - [`codegen`] - emission engine, wrapper emitters, diagnostics

pub mod prelude;

/// Interop schema model, parsing, and validation.
pub mod schema {
    pub use ironbind_schema::*;
}

/// Wrapper code generation from interop schemas.
pub mod codegen {
    pub use ironbind_codegen::*;
}

pub use ironbind_codegen::{
    CodegenError, Diagnostics, GeneratedUnit, GeneratorConfig, generate_class, generate_from_file,
    generate_from_json, generate_schema,
};
pub use ironbind_schema::{InteropClass, MarshalCategory, ParseError, SchemaError};
