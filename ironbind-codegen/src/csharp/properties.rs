//! Property trampoline and accessor generation.

use super::INDENT;
use crate::diagnostics::Diagnostics;
use crate::emitter::EmissionEngine;
use crate::error::CodegenError;
use ironbind_schema::{InteropClass, InteropProperty, MarshalCategory, property_entry_point};

/// Generator for one property's trampoline declaration and accessor.
pub struct PropertyGenerator<'a> {
    class: &'a InteropClass,
    property: &'a InteropProperty,
}

impl<'a> PropertyGenerator<'a> {
    /// Creates a new property generator.
    #[must_use]
    pub fn new(class: &'a InteropClass, property: &'a InteropProperty) -> Self {
        Self { class, property }
    }

    /// Emits the trampoline declaration and the accessor, at the current
    /// indent level.
    ///
    /// # Errors
    /// Returns `CodegenError` if the entry-point symbol cannot be built.
    pub fn generate(
        &self,
        ctx: &mut EmissionEngine,
        diagnostics: &Diagnostics,
    ) -> Result<(), CodegenError> {
        let category = MarshalCategory::classify(self.property);
        self.generate_trampoline(ctx, category)?;
        ctx.newline();
        self.generate_accessor(ctx, diagnostics, category);
        Ok(())
    }

    /// Emits the `DllImport` trampoline bound to the derived entry point.
    ///
    /// The native handle of the enclosing class is always the first
    /// argument. Handle and string properties add an out-parameter and
    /// report a `Status`; primitive properties return the value directly.
    fn generate_trampoline(
        &self,
        ctx: &mut EmissionEngine,
        category: MarshalCategory,
    ) -> Result<(), CodegenError> {
        let entry_point = property_entry_point(&self.class.class_name, &self.property.name)?;

        ctx.write_line("[DllImport(");
        ctx.push_indent(INDENT);
        ctx.write_line("NativeInterface.DllName,");
        ctx.write_line(&format!("EntryPoint = \"{entry_point}\","));
        ctx.write_line("CallingConvention = CallingConvention.Cdecl,");
        ctx.write_line("SetLastError = true");
        ctx.pop_indent();
        ctx.write_line(")]");

        let native_return = if category.has_status() {
            "Status"
        } else {
            self.property.type_name.as_str()
        };
        ctx.write_line(&format!(
            "internal static extern {native_return} Get{}(",
            self.property.name
        ));
        ctx.push_indent(INDENT);
        let class = &self.class.class_name;
        let class_handle = self.class.handle_type();
        match category {
            MarshalCategory::Primitive => {
                ctx.write_line(&format!("NativeInterface.{class}.{class_handle} handle"));
            }
            MarshalCategory::OpaqueHandle => {
                ctx.write_line(&format!("NativeInterface.{class}.{class_handle} handle,"));
                ctx.write_line(&format!("out {} objectId", self.handle_type()));
            }
            MarshalCategory::StringOwned => {
                ctx.write_line(&format!("NativeInterface.{class}.{class_handle} handle,"));
                ctx.write_line("out IntPtr objectId");
            }
        }
        ctx.pop_indent();
        ctx.write_line(");");
        Ok(())
    }

    /// Emits the public accessor wrapping the trampoline call.
    fn generate_accessor(
        &self,
        ctx: &mut EmissionEngine,
        diagnostics: &Diagnostics,
        category: MarshalCategory,
    ) {
        if self.property.description.is_empty() {
            diagnostics.warning(
                Some(&self.class.class_name),
                format!("property '{}' has an empty description", self.property.name),
            );
        }
        write_doc_comment(ctx, &self.property.description);

        let name = &self.property.name;
        ctx.write_line(&format!(
            "public unsafe {} {name}",
            self.property.type_name
        ));
        ctx.write_line("{");
        ctx.push_indent(INDENT);
        ctx.write_line("get");
        ctx.write_line("{");
        ctx.push_indent(INDENT);
        match category {
            MarshalCategory::Primitive => {
                ctx.write_line(&format!("return Get{name}(Handle);"));
            }
            MarshalCategory::OpaqueHandle => {
                // Ownership transfers only after a successful status check.
                ctx.write_line(&format!(
                    "var status = Get{name}(Handle, out {} value);",
                    self.handle_type()
                ));
                ctx.write_line("status.ThrowIfError();");
                ctx.write_line(&format!("return new {}(value);", self.property.type_name));
            }
            MarshalCategory::StringOwned => {
                // The native pointer is owned by the wrapper once status is
                // ok and must be released exactly once.
                ctx.write_line(&format!("var status = Get{name}(Handle, out IntPtr value);"));
                ctx.write_line("status.ThrowIfError();");
                ctx.write_line("var data = Marshal.PtrToStringAnsi(value);");
                ctx.write_line("NativeInterface.Memory.FreeIntPtr(value);");
                ctx.write_line("return data;");
            }
        }
        ctx.pop_indent();
        ctx.write_line("}");
        ctx.pop_indent();
        ctx.write_line("}");
    }

    /// Returns the out-parameter handle type for an opaque-handle property.
    fn handle_type(&self) -> &str {
        self.property
            .native_handle_type
            .as_deref()
            .unwrap_or_default()
    }
}

/// Emits an XML doc comment, one `///` line per description line.
pub(crate) fn write_doc_comment(ctx: &mut EmissionEngine, description: &str) {
    ctx.write_line("/// <summary>");
    if description.is_empty() {
        ctx.write_line("///");
    } else {
        for line in description.lines() {
            ctx.write_line(&format!("/// {line}"));
        }
    }
    ctx.write_line("/// </summary>");
}
