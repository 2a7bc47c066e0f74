use std::path::Path;

use npmime::{MimeRegistry, MimeResolver};

const MIME_TYPES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mime.types");

#[test]
fn test_content_type_detection() {
    // 1. Registry from the fixture
    let mut registry = MimeRegistry::new();
    registry.load(MIME_TYPES).expect("Failed to load mime.types");
    registry.set_default_type(None);

    // 2. Text types carry a charset
    assert_eq!(
        MimeResolver::content_type(&registry, Path::new("/srv/www/index.html")),
        "text/html; charset=UTF-8"
    );
    assert_eq!(
        MimeResolver::content_type(&registry, Path::new("notes.TXT")),
        "text/plain; charset=UTF-8"
    );

    // 3. Binary types do not
    assert_eq!(MimeResolver::content_type(&registry, Path::new("logo.png")), "image/png");
    assert_eq!(MimeResolver::content_type(&registry, Path::new("app.js")), "application/javascript");

    // 4. Extensions missing from the fixture are guessed
    assert_eq!(MimeResolver::guess_mime_type(&registry, Path::new("font.woff2")), "font/woff2");

    // 5. Unknown everywhere falls to the registry default
    assert_eq!(
        MimeResolver::content_type(&registry, Path::new("data.npmime-unknown")),
        "application/octet-stream"
    );
}

#[test]
fn test_icon_name_for_detected_type() {
    let mut registry = MimeRegistry::new();
    registry.load(MIME_TYPES).unwrap();

    let mime_type = MimeResolver::guess_mime_type(&registry, Path::new("report.pdf"));
    assert_eq!(MimeResolver::get_icon_name(&mime_type), "application-pdf");
}
