//! Subcommand implementations.

use crate::cli::{CheckArgs, GenerateArgs};
use anyhow::Context;
use ironbind_codegen::{Diagnostics, GeneratorConfig, generate_from_file};

/// Exit code for a run that recorded at least one fatal diagnostic.
const EXIT_FATAL: i32 = 1;

/// Runs the generate command: emits one wrapper unit per class into the
/// output directory. Classes whose emission failed produce no file; the
/// remaining units are still written as individually valid artifacts.
pub fn generate(args: &GenerateArgs) -> anyhow::Result<i32> {
    let config = build_config(args.namespace.as_deref());
    let diagnostics = Diagnostics::new();
    let units = generate_from_file(&args.schema, &config, &diagnostics)
        .with_context(|| format!("failed to load schema '{}'", args.schema.display()))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create '{}'", args.out_dir.display()))?;
    for unit in &units {
        let path = args.out_dir.join(&unit.file_name);
        std::fs::write(&path, &unit.source)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(class = %unit.class_name, path = %path.display(), "wrote wrapper unit");
    }
    tracing::info!(units = units.len(), "generation finished");

    Ok(report(&diagnostics))
}

/// Runs the check command: parses, validates, and dry-runs emission
/// without writing any files.
pub fn check(args: &CheckArgs) -> anyhow::Result<i32> {
    let diagnostics = Diagnostics::new();
    let units = generate_from_file(&args.schema, &GeneratorConfig::default(), &diagnostics)
        .with_context(|| format!("failed to load schema '{}'", args.schema.display()))?;
    tracing::info!(units = units.len(), "schema check finished");

    Ok(report(&diagnostics))
}

fn build_config(namespace: Option<&str>) -> GeneratorConfig {
    match namespace {
        Some(namespace) => GeneratorConfig::with_namespace(namespace),
        None => GeneratorConfig::default(),
    }
}

/// Prints collected diagnostics and returns the process exit code.
/// Warnings do not affect the exit code; any fatal makes it non-zero.
fn report(diagnostics: &Diagnostics) -> i32 {
    for diagnostic in diagnostics.snapshot() {
        eprintln!("{diagnostic}");
    }
    if diagnostics.has_fatal() { EXIT_FATAL } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn unit_exists(dir: &Path, file_name: &str) -> bool {
        dir.join(file_name).is_file()
    }

    const SCHEMA: &str = r#"[
        {
            "ClassName": "Sample",
            "Properties": [
                {
                    "Name": "Value",
                    "Type": "Foo",
                    "Description": "The wrapped value.",
                    "NativeHandleType": "FooHandle"
                }
            ]
        }
    ]"#;

    fn write_schema(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("classes.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generate_writes_units_and_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), SCHEMA);
        let out_dir = dir.path().join("generated");

        let args = GenerateArgs {
            schema,
            out_dir: out_dir.clone(),
            namespace: None,
        };
        let code = generate(&args).unwrap();

        assert_eq!(code, 0);
        assert!(unit_exists(&out_dir, "Sample.generated.cs"));
        let source = std::fs::read_to_string(out_dir.join("Sample.generated.cs")).unwrap();
        assert!(source.contains("eg_sample_get_value"));
    }

    #[test]
    fn test_generate_fatal_class_skips_file_and_exits_nonzero() {
        let schema_json = r#"[
            { "ClassName": "Good", "Properties": [
                { "Name": "Count", "Type": "ulong", "Description": "Count." }
            ] },
            { "ClassName": "Bad", "Properties": [
                { "Name": "", "Type": "Foo", "NativeHandleType": "FooHandle" }
            ] }
        ]"#;
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), schema_json);
        let out_dir = dir.path().join("generated");

        let args = GenerateArgs {
            schema,
            out_dir: out_dir.clone(),
            namespace: None,
        };
        let code = generate(&args).unwrap();

        assert_eq!(code, EXIT_FATAL);
        assert!(unit_exists(&out_dir, "Good.generated.cs"));
        assert!(!unit_exists(&out_dir, "Bad.generated.cs"));
    }

    #[test]
    fn test_generate_missing_schema_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            schema: dir.path().join("missing.json"),
            out_dir: dir.path().join("generated"),
            namespace: None,
        };
        assert!(generate(&args).is_err());
    }

    #[test]
    fn test_generate_with_namespace_override() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), SCHEMA);
        let out_dir = dir.path().join("generated");

        let args = GenerateArgs {
            schema,
            out_dir: out_dir.clone(),
            namespace: Some("Acme.Native".to_string()),
        };
        assert_eq!(generate(&args).unwrap(), 0);
        let source = std::fs::read_to_string(out_dir.join("Sample.generated.cs")).unwrap();
        assert!(source.contains("namespace Acme.Native"));
    }

    #[test]
    fn test_check_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), SCHEMA);

        let args = CheckArgs {
            schema: schema.clone(),
        };
        assert_eq!(check(&args).unwrap(), 0);
        // Only the schema file itself exists in the directory.
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_check_reports_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), r#"[ { "ClassName": "2Bad" } ]"#);

        let args = CheckArgs { schema };
        assert_eq!(check(&args).unwrap(), EXIT_FATAL);
    }
}
