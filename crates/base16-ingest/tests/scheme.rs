use std::fs;
use std::path::Path;

use base16_ingest::{SchemeError, load_scheme};
use base16_model::{Base, DEFAULT_AUTHOR, Rgb};
use tempfile::TempDir;

const OCEAN: &str = "\
scheme: \"Ocean\"
author: \"Chris Kempson (http://chriskempson.com)\"
base00: \"2b303b\"
base01: \"343d46\"
base02: \"4f5b66\"
base03: \"65737e\"
base04: \"a7adba\"
base05: \"c0c5ce\"
base06: \"dfe1e8\"
base07: \"eff1f5\"
base08: \"bf616a\"
base09: \"d08770\"
base0A: \"ebcb8b\"
base0B: \"a3be8c\"
base0C: \"96b5b4\"
base0D: \"8fa1b3\"
base0E: \"b48ead\"
base0F: \"ab7967\"
";

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write scheme");
    path
}

#[test]
fn loads_scheme_from_disk() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "ocean.yaml", OCEAN);

    let scheme = load_scheme(&path).expect("load scheme");

    assert_eq!(scheme.name, "Ocean");
    assert_eq!(scheme.background(), Rgb::new(0x2b, 0x30, 0x3b));
    assert_eq!(scheme[Base::Base0D], Rgb::new(0x8f, 0xa1, 0xb3));
    assert_eq!(scheme.colors().len(), 16);
}

#[test]
fn name_defaults_to_file_stem() {
    let dir = TempDir::new().expect("tempdir");
    let stripped: String = OCEAN
        .lines()
        .skip(2)
        .map(|line| format!("{line}\n"))
        .collect();
    let path = write(&dir, "base16-ocean.yml", &stripped);

    let scheme = load_scheme(&path).expect("load scheme");

    assert_eq!(scheme.name, "base16-ocean");
    assert_eq!(scheme.author, DEFAULT_AUTHOR);
}

#[test]
fn blank_metadata_counts_as_missing() {
    let dir = TempDir::new().expect("tempdir");
    let source = OCEAN.replace("\"Ocean\"", "\"   \"");
    let path = write(&dir, "ocean.yaml", &source);

    let scheme = load_scheme(&path).expect("load scheme");

    assert_eq!(scheme.name, "ocean");
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let err = load_scheme(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, SchemeError::NotFound { .. }));
}

#[test]
fn missing_colors_are_reported_in_slot_order() {
    let dir = TempDir::new().expect("tempdir");
    let source: String = OCEAN
        .lines()
        .filter(|line| !line.starts_with("base0F") && !line.starts_with("base03"))
        .map(|line| format!("{line}\n"))
        .collect();
    let path = write(&dir, "partial.yaml", &source);

    let err = load_scheme(&path).unwrap_err();

    match &err {
        SchemeError::MissingColors { path: reported, missing } => {
            assert_eq!(reported, &path);
            assert_eq!(missing, &[Base::Base03, Base::Base0F]);
        }
        other => panic!("expected MissingColors, got {other:?}"),
    }
    assert!(err.to_string().ends_with("missing required colors: base03, base0F"));
}

#[test]
fn invalid_color_names_the_slot() {
    let dir = TempDir::new().expect("tempdir");
    let source = OCEAN.replace("\"d08770\"", "\"zz8770\"");
    let path = write(&dir, "bad.yaml", &source);

    let err = load_scheme(&path).unwrap_err();

    assert!(matches!(err, SchemeError::InvalidColor { slot: Base::Base09, .. }));
    assert!(err.is_validation());
    assert!(err.to_string().contains("base09"));
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "empty.yaml", "");
    let err = load_scheme(&path).unwrap_err();
    assert!(matches!(err, SchemeError::NotAMapping { .. }));
}

#[test]
fn extra_keys_are_ignored() {
    let dir = TempDir::new().expect("tempdir");
    let source = format!("{OCEAN}slug: \"ocean\"\nvariant: \"dark\"\n");
    let path = write(&dir, "ocean.yaml", &source);
    assert!(load_scheme(Path::new(&path)).is_ok());
}
