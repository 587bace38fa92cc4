//! Integration tests for override document rendering and writing.

use std::fs;

use base16_model::{Rgb, Scheme, Variant};
use base16_report::{render_document, write_document};
use base16_transform::derive_palette;
use tempfile::TempDir;

fn tomorrow_night() -> Scheme {
    let colors = [
        "1d1f21", "282a2e", "373b41", "969896", "b4b7b4", "c5c8c6", "e0e0e0", "ffffff", "cc6666",
        "de935f", "f0c674", "b5bd68", "8abeb7", "81a2be", "b294bb", "a3685a",
    ]
    .map(|value| Rgb::from_hex(value).unwrap());
    Scheme::new(
        "Tomorrow Night",
        "Chris Kempson (http://chriskempson.com)",
        colors,
    )
}

#[test]
fn tomorrow_night_dark_snapshot() {
    let scheme = tomorrow_night();
    let document = render_document(&scheme, &derive_palette(&scheme, Variant::Dark));
    insta::assert_snapshot!("tomorrow_night_dark", document);
}

#[test]
fn tomorrow_night_light_snapshot() {
    let scheme = tomorrow_night();
    let document = render_document(&scheme, &derive_palette(&scheme, Variant::Light));
    insta::assert_snapshot!("tomorrow_night_light", document);
}

#[test]
fn dark_document_contains_expected_roles() {
    let scheme = tomorrow_night();
    let document = render_document(&scheme, &derive_palette(&scheme, Variant::Dark));

    assert!(document.contains("// Variant: dark\n"));
    assert!(document.contains("@define-color window_bg_color #1d1f21;\n"));
    assert!(document.contains("@define-color destructive_fg_color white;\n"));
    assert!(document.contains("$blue_3: #81a2be;\n"));
}

#[test]
fn rendering_is_deterministic() {
    let scheme = tomorrow_night();
    let palette = derive_palette(&scheme, Variant::Dark);
    assert_eq!(
        render_document(&scheme, &palette),
        render_document(&scheme, &palette)
    );
}

#[test]
fn write_creates_parent_directories() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("src").join("sass").join("_base16-override.scss");

    write_document(&path, "// test\n").expect("write document");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "// test\n");
}

#[test]
fn write_replaces_existing_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("override.scss");
    fs::write(&path, "stale contents that are longer than the new ones\n").expect("seed");

    write_document(&path, "fresh\n").expect("write document");

    assert_eq!(fs::read_to_string(&path).expect("read back"), "fresh\n");
}

#[test]
fn write_reports_the_failing_path() {
    let dir = TempDir::new().expect("tempdir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("seed");
    let path = blocker.join("override.scss");

    let err = write_document(&path, "x").unwrap_err();

    assert!(format!("{err:#}").contains("blocker"));
}
