use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::error::{MimeError, MimeErrorKind, MimeResult};
use crate::loader;

/// Charset reported for every `text/*` type.
pub const TEXT_CHARSET: &str = "UTF-8";

/// Extension whose type becomes the default when no explicit default is given.
pub const DEFAULT_TYPE_EXTENSION: &str = "bin";

/// Two-way table between file extensions and MIME types.
///
/// Extensions map to exactly one type (the most recent registration wins) and
/// every type maps back to its canonical extension, the first one listed the
/// last time the type was defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeRegistry {
    types: HashMap<String, String>,
    extensions: HashMap<String, String>,
    default_type: Option<String>,
}

impl MimeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `type -> [extensions]` definitions.
    ///
    /// Extensions are stored exactly as given. The first extension of each list
    /// becomes the type's canonical extension. If any type comes with an empty
    /// list the whole call is rejected and nothing is registered.
    ///
    /// ```
    /// use npmime::MimeRegistry;
    ///
    /// let mut registry = MimeRegistry::new();
    /// registry.define_map([("audio/ogg", vec!["oga", "ogg", "spx"])]).unwrap();
    /// assert_eq!(registry.get_type("spx"), Some("audio/ogg"));
    /// assert_eq!(registry.get_extension("audio/ogg"), Some("oga"));
    /// ```
    pub fn define_map<I, T, E>(&mut self, map: I) -> MimeResult<()>
    where
        I: IntoIterator<Item = (T, Vec<E>)>,
        T: Into<String>,
        E: Into<String>,
    {
        // (type, canonical extension, all extensions), validated before any write.
        let entries: Vec<(String, String, Vec<String>)> = map
            .into_iter()
            .map(|(mime_type, exts)| {
                let mime_type: String = mime_type.into();
                let exts: Vec<String> = exts.into_iter().map(Into::into).collect();
                match exts.first() {
                    Some(canonical) => Ok((mime_type, canonical.clone(), exts)),
                    None => Err(MimeError::new(
                        MimeErrorKind::InvalidArg,
                        format!("No extensions given for type: {}", mime_type),
                    )),
                }
            })
            .collect::<MimeResult<_>>()?;

        let count = entries.len();
        for (mime_type, canonical, exts) in entries {
            for ext in exts {
                self.types.insert(ext, mime_type.clone());
            }
            self.extensions.insert(mime_type, canonical);
        }

        tracing::debug!("Defined {} MIME types ({} extensions known)", count, self.types.len());
        Ok(())
    }

    /// Loads an Apache-style `.types` file.
    ///
    /// May be called repeatedly; where files declare overlapping types or
    /// extensions the last file wins. The file is parsed completely before
    /// anything is registered, so a failed read leaves the registry untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> MimeResult<()> {
        let path = path.as_ref();
        let entries = loader::read_types_file(path)?;
        tracing::debug!("Loaded {} records from {}", entries.len(), path.display());
        self.commit_types(entries)
    }

    /// Same as [`MimeRegistry::load`], reading the file through tokio.
    pub async fn load_async(&mut self, path: impl AsRef<Path>) -> MimeResult<()> {
        let path = path.as_ref();
        let entries = loader::read_types_file_async(path).await?;
        tracing::debug!("Loaded {} records from {}", entries.len(), path.display());
        self.commit_types(entries)
    }

    /// Parses and registers `.types` text that is already in memory.
    pub fn load_str(&mut self, text: &str) -> MimeResult<()> {
        self.commit_types(loader::parse_types(text))
    }

    /// Loads every readable well-known system `.types` file, user file last.
    /// Returns how many files were loaded.
    pub fn load_system(&mut self) -> usize {
        self.load_available(loader::system_types_paths())
    }

    /// Loads each of `paths` in order, skipping files that are missing or
    /// cannot be read. Returns how many files were loaded.
    pub fn load_available<P: AsRef<Path>>(&mut self, paths: impl IntoIterator<Item = P>) -> usize {
        let mut loaded = 0;
        for path in paths {
            let path = path.as_ref();
            match self.load(path) {
                Ok(()) => {
                    tracing::info!("Loaded types file {}", path.display());
                    loaded += 1;
                }
                Err(e) if e.kind() == MimeErrorKind::NotFound => {
                    tracing::trace!("No types file at {}", path.display());
                }
                Err(e) => {
                    tracing::warn!("Skipping types file: {}", e);
                }
            }
        }
        loaded
    }

    // Type-only records declare no mapping and are dropped here.
    pub(crate) fn commit_types(&mut self, entries: Vec<(String, Vec<String>)>) -> MimeResult<()> {
        self.define_map(entries.into_iter().filter(|(_, exts)| !exts.is_empty()))
    }

    /// Looks up the type for a path or bare extension, case-insensitively.
    ///
    /// Falls back to `fallback` when it is non-empty, then to the default type.
    pub fn lookup<'a>(&'a self, path: &str, fallback: Option<&'a str>) -> Option<&'a str> {
        let ext = extension_of(path);
        if let Some(mime_type) = self.types.get(&ext) {
            return Some(mime_type.as_str());
        }

        match fallback {
            Some(fallback) if !fallback.is_empty() => Some(fallback),
            _ => self.get_default_type(),
        }
    }

    /// Canonical extension of a registered type.
    pub fn get_extension(&self, mime_type: &str) -> Option<&str> {
        self.extensions.get(mime_type).map(String::as_str)
    }

    /// Type registered for the exact extension key, without case folding or path parsing.
    pub fn get_type(&self, key: &str) -> Option<&str> {
        self.types.get(key).map(String::as_str)
    }

    /// Charset guess for a MIME type: `UTF-8` for `text/*`, `fallback` otherwise.
    pub fn lookup_charset<'a>(mime_type: &str, fallback: Option<&'a str>) -> Option<&'a str> {
        if mime_type.starts_with("text/") {
            Some(TEXT_CHARSET)
        } else {
            fallback
        }
    }

    /// Sets the default type. With `None` the type currently registered for
    /// `bin` is used; if there is none the previous default is kept.
    pub fn set_default_type(&mut self, default_type: Option<&str>) {
        match default_type {
            Some(default_type) => {
                self.default_type = Some(default_type.to_string());
            }
            None => match self.types.get(DEFAULT_TYPE_EXTENSION) {
                Some(mime_type) => {
                    self.default_type = Some(mime_type.clone());
                }
                None => {
                    tracing::warn!(
                        "No type registered for '{}', default type left unchanged",
                        DEFAULT_TYPE_EXTENSION
                    );
                    return;
                }
            },
        }
        tracing::debug!("Default MIME type set to {:?}", self.default_type);
    }

    pub fn get_default_type(&self) -> Option<&str> {
        self.default_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.extensions.clear();
        self.default_type = None;
    }
}

/// Extension used for lookups: the text after the last `.` or `/`, lower-cased.
/// Input without either separator is taken as the extension itself.
pub fn extension_of(path: &str) -> String {
    path.rsplit(['.', '/'])
        .next()
        .unwrap_or(path)
        .to_ascii_lowercase()
}

static REGISTRY: Lazy<RwLock<MimeRegistry>> = Lazy::new(|| {
    RwLock::new(MimeRegistry::new())
});

fn read_registry() -> RwLockReadGuard<'static, MimeRegistry> {
    REGISTRY.read().unwrap_or_else(|e: PoisonError<_>| {
        tracing::warn!("Recovering poisoned MIME registry lock");
        e.into_inner()
    })
}

fn write_registry() -> RwLockWriteGuard<'static, MimeRegistry> {
    REGISTRY.write().unwrap_or_else(|e: PoisonError<_>| {
        tracing::warn!("Recovering poisoned MIME registry lock");
        e.into_inner()
    })
}

/// Runs `f` against the process-wide registry under the read lock.
pub fn with_registry<R>(f: impl FnOnce(&MimeRegistry) -> R) -> R {
    f(&read_registry())
}

/// Replaces the content of the process-wide registry.
pub fn install_registry(registry: MimeRegistry) {
    *write_registry() = registry;
}

pub fn define_map<I, T, E>(map: I) -> MimeResult<()>
where
    I: IntoIterator<Item = (T, Vec<E>)>,
    T: Into<String>,
    E: Into<String>,
{
    write_registry().define_map(map)
}

pub fn load(path: impl AsRef<Path>) -> MimeResult<()> {
    let path = path.as_ref();
    let entries = loader::read_types_file(path)?;
    tracing::debug!("Loaded {} records from {}", entries.len(), path.display());
    write_registry().commit_types(entries)
}

pub async fn load_async(path: impl AsRef<Path>) -> MimeResult<()> {
    let path = path.as_ref();
    // The lock is only taken once the file has been read.
    let entries = loader::read_types_file_async(path).await?;
    tracing::debug!("Loaded {} records from {}", entries.len(), path.display());
    write_registry().commit_types(entries)
}

pub fn lookup(path: &str, fallback: Option<&str>) -> Option<String> {
    read_registry().lookup(path, fallback).map(str::to_string)
}

pub fn get_extension(mime_type: &str) -> Option<String> {
    read_registry().get_extension(mime_type).map(str::to_string)
}

pub fn get_type(key: &str) -> Option<String> {
    read_registry().get_type(key).map(str::to_string)
}

pub fn lookup_charset<'a>(mime_type: &str, fallback: Option<&'a str>) -> Option<&'a str> {
    MimeRegistry::lookup_charset(mime_type, fallback)
}

pub fn set_default_type(default_type: Option<&str>) {
    write_registry().set_default_type(default_type);
}

pub fn get_default_type() -> Option<String> {
    read_registry().get_default_type().map(str::to_string)
}

pub fn clear() {
    write_registry().clear();
}
