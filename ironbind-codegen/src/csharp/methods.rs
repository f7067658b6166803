//! Method forwarder generation.

use super::INDENT;
use super::properties::write_doc_comment;
use crate::diagnostics::Diagnostics;
use crate::emitter::EmissionEngine;
use ironbind_schema::{InteropClass, InteropMethod};

/// Generator for one method forwarder.
///
/// Forwarders pass the wrapper's handle followed by the declared
/// parameters to the native trampoline and return its result unmarshaled.
pub struct MethodGenerator<'a> {
    class: &'a InteropClass,
    method: &'a InteropMethod,
}

impl<'a> MethodGenerator<'a> {
    /// Creates a new method generator.
    #[must_use]
    pub fn new(class: &'a InteropClass, method: &'a InteropMethod) -> Self {
        Self { class, method }
    }

    /// Emits the forwarder at the current indent level.
    pub fn generate(&self, ctx: &mut EmissionEngine, diagnostics: &Diagnostics) {
        if self.method.description.is_empty() {
            diagnostics.warning(
                Some(&self.class.class_name),
                format!("method '{}' has an empty description", self.method.name),
            );
        }
        // The observed native shape takes the handle plus one declared
        // argument; wider signatures are an extension point worth flagging.
        if self.method.params.len() > 1 {
            diagnostics.warning(
                Some(&self.class.class_name),
                format!(
                    "method '{}' declares {} parameters; the native shape forwards one",
                    self.method.name,
                    self.method.params.len()
                ),
            );
        }

        write_doc_comment(ctx, &self.method.description);
        ctx.write_line(&format!(
            "public unsafe {} {}(",
            self.method.return_type, self.method.name
        ));
        ctx.push_indent(INDENT);
        for (index, param) in self.method.params.iter().enumerate() {
            let separator = if index + 1 < self.method.params.len() {
                ","
            } else {
                ""
            };
            ctx.write_line(&format!("{} {}{separator}", param.type_name, param.name));
        }
        ctx.pop_indent();
        ctx.write_line(")");
        ctx.write_line("{");
        ctx.push_indent(INDENT);

        let forwarded: Vec<&str> = self.method.params.iter().map(|p| p.name.as_str()).collect();
        ctx.write_line(&format!(
            "return NativeInterface.{}.{}(Handle, {});",
            self.class.class_name,
            self.method.name,
            forwarded.join(", ")
        ));
        ctx.pop_indent();
        ctx.write_line("}");
    }
}
