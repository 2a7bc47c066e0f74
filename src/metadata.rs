use std::path::Path;
use mime_guess::MimeGuess;

use crate::registry::{extension_of, MimeRegistry};

pub const OCTET_STREAM: &str = "application/octet-stream";

pub struct MimeResolver;

impl MimeResolver {
    /// Guesses the MIME type for a file path.
    /// The registry is asked first; extensions it does not know are guessed by
    /// `mime_guess` before falling back to the registry default type.
    pub fn guess_mime_type(registry: &MimeRegistry, path: &Path) -> String {
        let name = path.to_string_lossy();
        if let Some(mime_type) = registry.get_type(&extension_of(&name)) {
            return mime_type.to_string();
        }

        if let Some(guess) = MimeGuess::from_path(path).first() {
            return guess.to_string();
        }

        registry.get_default_type().unwrap_or(OCTET_STREAM).to_string()
    }

    /// Value for a `Content-Type` header, with the charset appended for text types.
    pub fn content_type(registry: &MimeRegistry, path: &Path) -> String {
        let mime_type = Self::guess_mime_type(registry, path);
        match MimeRegistry::lookup_charset(&mime_type, None) {
            Some(charset) => format!("{}; charset={}", mime_type, charset),
            None => mime_type,
        }
    }

    /// Gets the icon name for a given MIME type.
    /// Follows the freedesktop.org Icon Naming Specification.
    pub fn get_icon_name(mime_type: &str) -> String {
        // e.g. "text/plain" -> "text-plain"
        mime_type.replace('/', "-")
    }
}
