use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::ClientError;

static BUILTIN: Lazy<ModelRegistry> = Lazy::new(|| {
    ModelRegistry::new([
        ("Qwen3-235B", "Qwen/Qwen3-235B-A22B-Instruct-2507-FP8"),
        ("Qwen3-32B", "Qwen/Qwen3-32B-FP8"),
    ])
});

/// Alias table mapping short model names onto the identifiers the
/// inference service accepts. Lookups work in both directions: a canonical
/// identifier resolves to itself.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: Vec<(String, String)>,
}

impl ModelRegistry {
    pub fn new<I, A, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        }
    }

    pub fn builtin() -> &'static ModelRegistry {
        &BUILTIN
    }

    pub fn resolve(&self, name: &str) -> Result<String, ClientError> {
        if let Some((_, canonical)) = self.entries.iter().find(|(alias, _)| alias == name) {
            debug!(alias = name, %canonical, "resolved model alias");
            return Ok(canonical.clone());
        }

        if self.canonical_names().any(|canonical| canonical == name) {
            return Ok(name.to_string());
        }

        Err(ClientError::UnsupportedModel {
            name: name.to_string(),
            allowed: self.allowed().join(", "),
        })
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, canonical)| canonical.as_str())
    }

    /// Every accepted input, aliases first.
    pub fn allowed(&self) -> Vec<&str> {
        self.aliases().chain(self.canonical_names()).collect()
    }
}
