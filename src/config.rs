use std::ffi::OsString;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::MimeResult;
use crate::registry::{install_registry, MimeRegistry};

pub const ENV_TYPES_FILES: &str = "NPMIME_TYPES_FILES";
pub const ENV_SYSTEM_TYPES: &str = "NPMIME_SYSTEM_TYPES";
pub const ENV_DEFAULT_TYPE: &str = "NPMIME_DEFAULT_TYPE";

/// How a registry is populated at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// `.types` files loaded in order, later files overriding earlier ones.
    pub types_files: Vec<PathBuf>,
    /// Load the system `.types` files before `types_files`.
    pub system_types: bool,
    /// Explicit default type. When unset the type of `bin` is used.
    pub default_type: Option<String>,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    fn from_vars(var: impl Fn(&str) -> Option<OsString>) -> Self {
        let types_files = var(ENV_TYPES_FILES)
            .map(|paths| std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default();

        let system_types = var(ENV_SYSTEM_TYPES)
            .map(|v| matches!(v.to_string_lossy().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let default_type = var(ENV_DEFAULT_TYPE)
            .map(|v| v.to_string_lossy().into_owned())
            .filter(|v| !v.is_empty());

        Self {
            types_files,
            system_types,
            default_type,
        }
    }

    /// Builds a populated registry handle.
    pub fn build(&self) -> MimeResult<MimeRegistry> {
        let mut registry = MimeRegistry::new();
        if self.system_types {
            registry.load_system();
        }
        for path in &self.types_files {
            registry.load(path)?;
        }
        registry.set_default_type(self.default_type.as_deref());
        Ok(registry)
    }
}

/// Replaces the process-wide registry with one built from `config`.
/// On error the global registry is left as it was.
pub fn init_global(config: &RegistryConfig) -> MimeResult<()> {
    let registry = config.build()?;
    tracing::debug!("Installing global MIME registry with {} extensions", registry.len());
    install_registry(registry);
    Ok(())
}
