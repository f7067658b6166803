//! Wrapper class unit generation.

use super::INDENT;
use super::methods::MethodGenerator;
use super::properties::PropertyGenerator;
use crate::config::GeneratorConfig;
use crate::diagnostics::Diagnostics;
use crate::emitter::EmissionEngine;
use crate::error::CodegenError;
use ironbind_schema::{InteropClass, validate_class};

/// Generator for one complete wrapper-class source unit.
///
/// The unit layout is fixed: generated-file header, using directives,
/// namespace wrapper, partial class, then a Properties region and a
/// Methods region in declaration order.
pub struct ClassGenerator<'a> {
    class: &'a InteropClass,
    config: &'a GeneratorConfig,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(class: &'a InteropClass, config: &'a GeneratorConfig) -> Self {
        Self { class, config }
    }

    /// Generates the source unit for this class.
    ///
    /// On failure the class's buffer is discarded entirely, a fatal
    /// diagnostic is recorded, and no partial unit is returned.
    ///
    /// # Errors
    /// Returns `CodegenError` for a structurally invalid class or a
    /// malformed identifier.
    pub fn generate(&self, diagnostics: &Diagnostics) -> Result<String, CodegenError> {
        match self.emit(diagnostics) {
            Ok(source) => Ok(source),
            Err(err) => {
                diagnostics.fatal(Some(&self.class.class_name), err.to_string());
                Err(err)
            }
        }
    }

    fn emit(&self, diagnostics: &Diagnostics) -> Result<String, CodegenError> {
        validate_class(self.class)?;

        let mut ctx = EmissionEngine::new();
        ctx.write_line("// DO NOT MODIFY THIS FILE");
        ctx.write_line("// This file is generated via ironbind from the interop schema");
        ctx.newline();
        ctx.write_line("using System;");
        ctx.write_line("using System.Runtime.InteropServices;");
        ctx.newline();
        ctx.write_line(&format!("namespace {}", self.config.namespace));
        ctx.write_line("{");
        ctx.push_indent(INDENT);
        ctx.write_line(&format!("public partial class {}", self.class.class_name));
        ctx.write_line("{");
        ctx.push_indent(INDENT);

        ctx.write_line("#region Properties");
        for property in &self.class.properties {
            ctx.newline();
            PropertyGenerator::new(self.class, property).generate(&mut ctx, diagnostics)?;
        }
        ctx.newline();
        ctx.write_line("#endregion");
        ctx.newline();
        ctx.write_line("#region Methods");
        for method in &self.class.methods {
            ctx.newline();
            MethodGenerator::new(self.class, method).generate(&mut ctx, diagnostics);
        }
        ctx.newline();
        ctx.write_line("#endregion");

        ctx.pop_indent();
        ctx.write_line("}");
        ctx.pop_indent();
        ctx.write_line("}");
        Ok(ctx.render())
    }
}
