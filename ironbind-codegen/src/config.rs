//! Generator configuration.
//!
//! The configuration object replaces the generation-environment globals of
//! template-based generators: one instance per invocation, passed by
//! reference through the emitters.

/// Configuration for one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Namespace wrapping every generated class.
    pub namespace: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "ElectionGuard".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with the given namespace.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}
