//! # npmime - Nepsod MIME
//!
//! Extension to content-type registry for Linux file tools and HTTP servers.
//!
//! ## Overview
//!
//! npmime keeps a two-way table between file extensions and MIME types. Tables
//! are filled from Apache-style `.types` files (such as `/etc/mime.types`) or
//! defined in code, and answer lookups by path, by extension, and by type.
//!
//! ## Core Concepts
//!
//! - **MimeRegistry**: an explicit registry handle, cheap to create per test or per host
//! - **Global registry**: a process-wide registry behind free functions (`load`, `lookup`, ...)
//! - **Default type**: returned by `lookup` when nothing matches and no fallback is given
//! - **MimeResolver**: file-manager helpers (content type header, icon names)
//!
//! ## Example
//!
//! ```no_run
//! use npmime::MimeRegistry;
//!
//! # fn example() -> npmime::MimeResult<()> {
//! let mut registry = MimeRegistry::new();
//! registry.load("/etc/mime.types")?;
//! registry.set_default_type(None);
//!
//! assert_eq!(registry.lookup("index.HTML", None), Some("text/html"));
//! assert_eq!(registry.get_extension("text/html"), Some("html"));
//! assert_eq!(MimeRegistry::lookup_charset("text/html", None), Some("UTF-8"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod registry;

pub use config::{init_global, RegistryConfig};
pub use error::{MimeError, MimeErrorKind, MimeResult};
pub use loader::{parse_types, system_types_paths};
pub use metadata::MimeResolver;
pub use registry::{
    clear, define_map, extension_of, get_default_type, get_extension, get_type, install_registry,
    load, load_async, lookup, lookup_charset, set_default_type, with_registry, MimeRegistry,
};
